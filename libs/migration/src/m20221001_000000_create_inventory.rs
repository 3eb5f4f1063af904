use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(pk_auto(Inventory::Id))
                    .col(string(Inventory::Name))
                    .col(integer(Inventory::Quantity))
                    .col(boolean(Inventory::Deleted).default(false))
                    .col(string(Inventory::DeletionComments).default(""))
                    .to_owned(),
            )
            .await?;

        // Every listing filters on the deletion flag
        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_deleted")
                    .table(Inventory::Table)
                    .col(Inventory::Deleted)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    Id,
    Name,
    Quantity,
    Deleted,
    DeletionComments,
}
