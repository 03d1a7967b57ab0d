use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeeklyOperations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeeklyOperations::WeeklyOperationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WeeklyOperations::UserId).integer().not_null())
                    // References locations.location_id; the wire name stays product_id.
                    .col(
                        ColumnDef::new(WeeklyOperations::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WeeklyOperations::WeekStart).date().not_null())
                    .col(
                        ColumnDef::new(WeeklyOperations::NumberOfBoxes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyOperations::TotalMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyOperations::AverageBoxesPerMinute)
                            .double()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WeeklyOperations::Table, WeeklyOperations::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WeeklyOperations::Table, WeeklyOperations::ProductId)
                            .to(Locations::Table, Locations::LocationId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(WeeklyOperations::Table)
                    .col(WeeklyOperations::ProductId)
                    .col(WeeklyOperations::WeekStart)
                    .name("idx_weekly_operations_product_id_week_start")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeeklyOperations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WeeklyOperations {
    Table,
    WeeklyOperationId,
    UserId,
    ProductId,
    WeekStart,
    NumberOfBoxes,
    TotalMinutes,
    AverageBoxesPerMinute,
}

#[derive(Iden)]
enum Users {
    Table,
    UserId,
}

#[derive(Iden)]
enum Locations {
    Table,
    LocationId,
}
