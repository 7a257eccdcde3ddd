//! The nine fixed reporting queries.
//!
//! Each report joins two to four tables and yields a titled table whose rows keep
//! the select-list column order.

use chrono::NaiveDate;
use models::booking::BookingStatus;
use sea_orm::{ConnectionTrait, QueryResult, Statement, Value};
use serde::Serialize;
use serde_json::{Map, Value as Json};
use tracing::{debug, instrument};

use crate::errors::ServiceError;

/// One result row: column name to value, in select-list order.
pub type ReportRow = Map<String, Json>;

pub const TOP_N: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    MostExpensiveListings,
    CheapestListings,
    AllListings,
    ConfirmedBookings,
    PendingBookings,
    CancelledBookings,
    HighestDiscounts,
    LowestDiscounts,
    AllDiscounts,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Order { Asc, Desc }

impl Order {
    fn sql(self) -> &'static str {
        match self { Order::Asc => "ASC", Order::Desc => "DESC" }
    }
}

#[derive(Clone, Copy, Debug)]
enum ReportQuery {
    Listings { order: Option<Order>, limit: Option<u64> },
    Bookings { status: BookingStatus },
    Discounts { order: Order, limit: Option<u64> },
}

#[derive(Clone, Copy, Debug)]
enum ColumnKind { Text, Real, Integer, Date }

#[derive(Clone, Copy, Debug)]
struct ColumnDef {
    name: &'static str,
    kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> ColumnDef {
    ColumnDef { name, kind }
}

const LISTING_COLUMNS: &[ColumnDef] = &[
    col("host_name", ColumnKind::Text),
    col("accommodation_title", ColumnKind::Text),
    col("price_per_night", ColumnKind::Real),
];

const BOOKING_COLUMNS: &[ColumnDef] = &[
    col("guest_name", ColumnKind::Text),
    col("accommodation_title", ColumnKind::Text),
    col("status", ColumnKind::Text),
    col("checkin_date", ColumnKind::Date),
    col("checkout_date", ColumnKind::Date),
];

const DISCOUNT_COLUMNS: &[ColumnDef] = &[
    col("accommodation_title", ColumnKind::Text),
    col("discount_percentage", ColumnKind::Integer),
    col("start_date", ColumnKind::Date),
    col("end_date", ColumnKind::Date),
];

const LISTINGS_SQL: &str = "SELECT u.name AS host_name, a.title AS accommodation_title, a.price_per_night \
     FROM hosts h \
     JOIN users u ON h.user_id = u.id \
     JOIN accommodations a ON h.id = a.host_id";

const BOOKINGS_SQL: &str = "SELECT u.name AS guest_name, a.title AS accommodation_title, b.status, b.checkin_date, b.checkout_date \
     FROM bookings b \
     JOIN guests g ON b.guest_id = g.id \
     JOIN users u ON g.user_id = u.id \
     JOIN accommodations a ON b.accommodation_id = a.id \
     WHERE b.status = ? \
     ORDER BY b.id";

const DISCOUNTS_SQL: &str = "SELECT a.title AS accommodation_title, d.discount_percentage, d.start_date, d.end_date \
     FROM discounts d \
     JOIN accommodations a ON d.accommodation_id = a.id";

impl ReportKind {
    pub const ALL: [ReportKind; 9] = [
        ReportKind::MostExpensiveListings,
        ReportKind::CheapestListings,
        ReportKind::AllListings,
        ReportKind::ConfirmedBookings,
        ReportKind::PendingBookings,
        ReportKind::CancelledBookings,
        ReportKind::HighestDiscounts,
        ReportKind::LowestDiscounts,
        ReportKind::AllDiscounts,
    ];

    /// 1-based position, as used in `/queryN`.
    pub fn number(self) -> u8 {
        match self {
            ReportKind::MostExpensiveListings => 1,
            ReportKind::CheapestListings => 2,
            ReportKind::AllListings => 3,
            ReportKind::ConfirmedBookings => 4,
            ReportKind::PendingBookings => 5,
            ReportKind::CancelledBookings => 6,
            ReportKind::HighestDiscounts => 7,
            ReportKind::LowestDiscounts => 8,
            ReportKind::AllDiscounts => 9,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.number() == n)
    }

    pub fn path(self) -> &'static str {
        match self {
            ReportKind::MostExpensiveListings => "/query1",
            ReportKind::CheapestListings => "/query2",
            ReportKind::AllListings => "/query3",
            ReportKind::ConfirmedBookings => "/query4",
            ReportKind::PendingBookings => "/query5",
            ReportKind::CancelledBookings => "/query6",
            ReportKind::HighestDiscounts => "/query7",
            ReportKind::LowestDiscounts => "/query8",
            ReportKind::AllDiscounts => "/query9",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::MostExpensiveListings => "Most expensive listings",
            ReportKind::CheapestListings => "Cheapest listings",
            ReportKind::AllListings => "All listings",
            ReportKind::ConfirmedBookings => "Confirmed listings",
            ReportKind::PendingBookings => "Pending listings",
            ReportKind::CancelledBookings => "Cancelled listings",
            ReportKind::HighestDiscounts => "Highest discounts",
            ReportKind::LowestDiscounts => "Lowest discounts",
            ReportKind::AllDiscounts => "All discounts",
        }
    }

    fn query(self) -> ReportQuery {
        use ReportQuery::*;
        match self {
            ReportKind::MostExpensiveListings => Listings { order: Some(Order::Desc), limit: Some(TOP_N) },
            ReportKind::CheapestListings => Listings { order: Some(Order::Asc), limit: Some(TOP_N) },
            ReportKind::AllListings => Listings { order: None, limit: None },
            ReportKind::ConfirmedBookings => Bookings { status: BookingStatus::Confirmed },
            ReportKind::PendingBookings => Bookings { status: BookingStatus::Pending },
            ReportKind::CancelledBookings => Bookings { status: BookingStatus::Cancelled },
            ReportKind::HighestDiscounts => Discounts { order: Order::Desc, limit: Some(TOP_N) },
            ReportKind::LowestDiscounts => Discounts { order: Order::Asc, limit: Some(TOP_N) },
            ReportKind::AllDiscounts => Discounts { order: Order::Asc, limit: None },
        }
    }

    fn columns(self) -> &'static [ColumnDef] {
        match self.query() {
            ReportQuery::Listings { .. } => LISTING_COLUMNS,
            ReportQuery::Bookings { .. } => BOOKING_COLUMNS,
            ReportQuery::Discounts { .. } => DISCOUNT_COLUMNS,
        }
    }

    pub fn column_names(self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.name).collect()
    }

    /// SQL text and bound values. Ties break on primary key so output is stable.
    fn statement_parts(self) -> (String, Vec<Value>) {
        let mut values: Vec<Value> = Vec::new();
        let mut sql = match self.query() {
            ReportQuery::Listings { order, .. } => match order {
                Some(o) => format!("{LISTINGS_SQL} ORDER BY a.price_per_night {}, a.id", o.sql()),
                None => format!("{LISTINGS_SQL} ORDER BY a.id"),
            },
            ReportQuery::Bookings { status } => {
                values.push(status.as_str().into());
                BOOKINGS_SQL.to_string()
            }
            ReportQuery::Discounts { order, .. } => {
                format!("{DISCOUNTS_SQL} ORDER BY d.discount_percentage {}, d.id", order.sql())
            }
        };
        let limit = match self.query() {
            ReportQuery::Listings { limit, .. } | ReportQuery::Discounts { limit, .. } => limit,
            ReportQuery::Bookings { .. } => None,
        };
        if let Some(n) = limit {
            sql.push_str(" LIMIT ?");
            values.push((n as i64).into());
        }
        (sql, values)
    }
}

/// A rendered-ready report.
#[derive(Clone, Debug, Serialize)]
pub struct ReportTable {
    pub number: u8,
    pub title: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<ReportRow>,
}

/// Execute a report. Read-only; an empty result is an empty table.
#[instrument(skip(db), fields(report = kind.number()))]
pub async fn run_report<C: ConnectionTrait>(db: &C, kind: ReportKind) -> Result<ReportTable, ServiceError> {
    let backend = db.get_database_backend();
    let (sql, values) = kind.statement_parts();
    let rows = db
        .query_all(Statement::from_sql_and_values(backend, sql, values))
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let columns = kind.columns();
    let rows = rows
        .iter()
        .map(|row| row_to_map(row, columns))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = rows.len(), "report executed");

    Ok(ReportTable { number: kind.number(), title: kind.title(), columns: kind.column_names(), rows })
}

fn row_to_map(row: &QueryResult, columns: &[ColumnDef]) -> Result<ReportRow, ServiceError> {
    let mut out = Map::with_capacity(columns.len());
    for c in columns {
        out.insert(c.name.to_string(), read_value(row, *c)?);
    }
    Ok(out)
}

fn read_value(row: &QueryResult, c: ColumnDef) -> Result<Json, ServiceError> {
    let err = |e: sea_orm::DbErr| ServiceError::Db(format!("column {}: {e}", c.name));
    let v = match c.kind {
        ColumnKind::Text => row.try_get::<Option<String>>("", c.name).map_err(err)?.map(Json::String),
        ColumnKind::Real => row
            .try_get::<Option<f64>>("", c.name)
            .map_err(err)?
            .and_then(serde_json::Number::from_f64)
            .map(Json::Number),
        ColumnKind::Integer => row.try_get::<Option<i64>>("", c.name).map_err(err)?.map(Json::from),
        ColumnKind::Date => row
            .try_get::<Option<NaiveDate>>("", c.name)
            .map_err(err)?
            .map(|d| Json::String(d.format("%Y-%m-%d").to_string())),
    };
    Ok(v.unwrap_or(Json::Null))
}
