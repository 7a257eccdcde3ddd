mod support;

use axum::http::StatusCode;
use service::reports::ReportKind;

use support::*;

fn position(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("{needle} not in page"))
}

#[tokio::test]
async fn every_report_renders_for_a_logged_in_user() -> anyhow::Result<()> {
    let app = app().await?;
    let cookie = login_new_user(&app, "reader@example.com").await;

    for kind in ReportKind::ALL {
        let res = send(&app, get(kind.path(), Some(&cookie))).await;
        assert_eq!(res.status(), StatusCode::OK, "{}", kind.path());
        let html = body_text(res).await;
        assert!(html.contains(kind.title()), "{}", kind.path());
        for column in kind.column_names() {
            assert!(html.contains(&format!("<th>{column}</th>")), "{} lacks {column}", kind.path());
        }
    }
    Ok(())
}

#[tokio::test]
async fn most_expensive_listings_are_ordered_and_limited() -> anyhow::Result<()> {
    let app = app().await?;
    let cookie = login_new_user(&app, "reader@example.com").await;
    let html = body_text(send(&app, get("/query1", Some(&cookie))).await).await;

    assert!(position(&html, "Harbour Penthouse") < position(&html, "Mountain Chalet"));
    assert!(position(&html, "Mountain Chalet") < position(&html, "Seaside Loft"));
    assert!(html.contains("Marco Rossi"));
    assert!(!html.contains("Budget Room"));
    assert_eq!(html.matches("<tr><td>").count(), 5);
    Ok(())
}

#[tokio::test]
async fn cheapest_listings_start_with_the_budget_room() -> anyhow::Result<()> {
    let app = app().await?;
    let cookie = login_new_user(&app, "reader@example.com").await;
    let html = body_text(send(&app, get("/query2", Some(&cookie))).await).await;

    assert!(position(&html, "Budget Room") < position(&html, "Old Town Studio"));
    assert!(!html.contains("Harbour Penthouse"));
    Ok(())
}

#[tokio::test]
async fn booking_reports_filter_by_status() -> anyhow::Result<()> {
    let app = app().await?;
    let cookie = login_new_user(&app, "reader@example.com").await;

    for (path, keep, drop) in [
        ("/query4", "Confirmed", ["Pending", "Cancelled"]),
        ("/query5", "Pending", ["Confirmed", "Cancelled"]),
        ("/query6", "Cancelled", ["Confirmed", "Pending"]),
    ] {
        let html = body_text(send(&app, get(path, Some(&cookie))).await).await;
        assert!(html.contains(&format!("<td>{keep}</td>")), "{path}");
        for other in drop {
            assert!(!html.contains(&format!("<td>{other}</td>")), "{path} shows {other}");
        }
    }

    let confirmed = body_text(send(&app, get("/query4", Some(&cookie))).await).await;
    assert!(confirmed.contains("Anna Conti"));
    assert!(confirmed.contains("2024-07-01"));
    Ok(())
}

#[tokio::test]
async fn discount_reports_sort_by_percentage() -> anyhow::Result<()> {
    let app = app().await?;
    let cookie = login_new_user(&app, "reader@example.com").await;

    let highest = body_text(send(&app, get("/query7", Some(&cookie))).await).await;
    assert!(position(&highest, "<td>40</td>") < position(&highest, "<td>30</td>"));
    assert!(!highest.contains("<td>5</td>"));

    let all = body_text(send(&app, get("/query9", Some(&cookie))).await).await;
    assert_eq!(all.matches("<tr><td>").count(), 7);
    assert!(position(&all, "<td>5</td>") < position(&all, "<td>40</td>"));
    Ok(())
}

#[tokio::test]
async fn health_is_public_json() -> anyhow::Result<()> {
    let app = app().await?;
    let res = send(&app, get("/health", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(res).await)?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
