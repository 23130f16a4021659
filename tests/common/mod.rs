use chrono::DateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;

pub mod user_entity;

/// Route filter debug logs to the test output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_test_writer()
        .compact()
        .try_init();
}

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    init_tracing();
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// In-memory database with a fixed set of users
pub async fn setup_test_db_with_users() -> Result<DatabaseConnection, DbErr> {
    let db = setup_test_db().await?;

    let users = [
        (1, "Alice", "Anderson", 30, "Berlin", "2024-01-01T00:00:00Z"),
        (2, "Bob", "Brown", 25, "Paris", "2024-01-02T00:00:00Z"),
        (3, "Alicia", "Keys", 41, "Berlin", "2024-02-01T00:00:00Z"),
        (4, "Carol", "Alison", 35, "Rome", "2024-03-15T00:00:00Z"),
        (5, "Dave", "O'Brien", 19, "Dublin", "2024-06-30T00:00:00Z"),
    ];

    for (id, first_name, last_name, age, city, joined_at) in users {
        let joined_at =
            DateTime::parse_from_rfc3339(joined_at).map_err(|e| DbErr::Custom(e.to_string()))?;
        user_entity::ActiveModel {
            id: ActiveValue::Set(id),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            age: ActiveValue::Set(age),
            city: ActiveValue::Set(city.to_string()),
            joined_at: ActiveValue::Set(joined_at),
        }
        .insert(&db)
        .await?;
    }

    Ok(db)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateUserTable)]
    }
}

pub struct CreateUserTable;

#[async_trait::async_trait]
impl MigrationName for CreateUserTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_user_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateUserTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(UserTable)
            .if_not_exists()
            .col(
                ColumnDef::new(UserColumn::Id)
                    .integer()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(UserColumn::FirstName).string().not_null())
            .col(ColumnDef::new(UserColumn::LastName).string().not_null())
            .col(ColumnDef::new(UserColumn::Age).integer().not_null())
            .col(ColumnDef::new(UserColumn::City).string().not_null())
            .col(
                ColumnDef::new(UserColumn::JoinedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserTable).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum UserColumn {
    Id,
    FirstName,
    LastName,
    Age,
    City,
    JoinedAt,
}

impl Iden for UserColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::FirstName => "first_name",
                Self::LastName => "last_name",
                Self::Age => "age",
                Self::City => "city",
                Self::JoinedAt => "joined_at",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct UserTable;

impl Iden for UserTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "users").unwrap();
    }
}
