//! Seed a small demo dataset so every report has rows on a fresh database.
//!
//! Seeded users carry an unusable password hash (`!`) and cannot log in.
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED: &[&str] = &[
    "INSERT INTO users (id, name, email, password_hash, phone, address, birth_date) VALUES
        (1, 'Marco Rossi', 'marco.rossi@demo.lodging', '!', '+39 320 111 2233', 'Via Roma 12, Firenze', '1980-04-12'),
        (2, 'Giulia Bianchi', 'giulia.bianchi@demo.lodging', '!', '+39 320 222 3344', 'Corso Italia 4, Milano', '1975-09-30'),
        (3, 'Luca Ferrari', 'luca.ferrari@demo.lodging', '!', '+39 320 333 4455', 'Via Po 8, Torino', '1988-01-21'),
        (4, 'Anna Conti', 'anna.conti@demo.lodging', '!', '+39 320 444 5566', 'Via Dante 3, Bologna', '1992-06-05'),
        (5, 'Paolo Ricci', 'paolo.ricci@demo.lodging', '!', '+39 320 555 6677', 'Via Verdi 22, Napoli', '1985-11-17'),
        (6, 'Sara Greco', 'sara.greco@demo.lodging', '!', '+39 320 666 7788', 'Piazza Duomo 1, Pisa', '1995-02-28'),
        (7, 'Davide Romano', 'davide.romano@demo.lodging', '!', NULL, NULL, NULL),
        (8, 'Elena Marino', 'elena.marino@demo.lodging', '!', '+39 320 888 9900', 'Via Garibaldi 9, Genova', '1990-08-14')",
    "INSERT INTO hosts (id, user_id) VALUES (1, 1), (2, 2), (3, 3)",
    "INSERT INTO guests (id, user_id) VALUES (1, 4), (2, 5), (3, 6), (4, 7), (5, 8)",
    "INSERT INTO accommodations (id, host_id, title, description, price_per_night) VALUES
        (1, 1, 'Seaside Loft', 'Open-plan loft a short walk from the beach', 180.0),
        (2, 1, 'Old Town Studio', 'Compact studio inside the historic centre', 75.0),
        (3, 2, 'Lake View Cabin', 'Timber cabin with a private jetty', 140.0),
        (4, 2, 'Mountain Chalet', 'Three-bedroom chalet next to the ski lifts', 260.0),
        (5, 3, 'City Center Apartment', 'Two rooms above the main square', 95.0),
        (6, 3, 'Countryside Farmhouse', 'Restored farmhouse among the vineyards', 120.0),
        (7, 1, 'Harbour Penthouse', 'Top-floor penthouse with a roof terrace', 320.0),
        (8, 2, 'Budget Room', 'Single room with shared bathroom', 45.0)",
    "INSERT INTO bookings (id, guest_id, accommodation_id, status, checkin_date, checkout_date) VALUES
        (1, 1, 1, 'Confirmed', '2024-07-01', '2024-07-08'),
        (2, 2, 4, 'Pending', '2024-12-20', '2024-12-27'),
        (3, 3, 2, 'Cancelled', '2024-05-10', '2024-05-12'),
        (4, 4, 7, 'Confirmed', '2024-08-15', '2024-08-22'),
        (5, 5, 3, 'Pending', '2024-09-03', '2024-09-06'),
        (6, 1, 5, 'Confirmed', '2024-10-11', '2024-10-14'),
        (7, 2, 6, 'Cancelled', '2024-06-01', '2024-06-05'),
        (8, 3, 8, 'Confirmed', '2024-11-02', '2024-11-04'),
        (9, 4, 4, 'Pending', '2025-01-05', '2025-01-12'),
        (10, 5, 1, 'Cancelled', '2024-07-20', '2024-07-27')",
    "INSERT INTO discounts (id, accommodation_id, discount_percentage, start_date, end_date) VALUES
        (1, 1, 10, '2024-06-01', '2024-06-30'),
        (2, 4, 25, '2024-04-01', '2024-05-31'),
        (3, 7, 5, '2024-09-01', '2024-09-30'),
        (4, 3, 15, '2024-10-01', '2024-11-15'),
        (5, 8, 30, '2024-01-10', '2024-02-28'),
        (6, 2, 20, '2024-11-01', '2024-12-15'),
        (7, 6, 40, '2025-01-07', '2025-01-31')",
];

const UNSEED: &[&str] = &[
    "DELETE FROM discounts WHERE id <= 7",
    "DELETE FROM bookings WHERE id <= 10",
    "DELETE FROM accommodations WHERE id <= 8",
    "DELETE FROM guests WHERE id <= 5",
    "DELETE FROM hosts WHERE id <= 3",
    "DELETE FROM users WHERE email LIKE '%@demo.lodging'",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for sql in SEED {
            db.execute_unprepared(sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for sql in UNSEED {
            db.execute_unprepared(sql).await?;
        }
        Ok(())
    }
}
