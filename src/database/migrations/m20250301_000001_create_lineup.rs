use sea_orm_migration::prelude::*;

use super::timestamp_column;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lineup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lineup::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lineup::Name).string().not_null())
                    .col(
                        ColumnDef::new(Lineup::Ssdp)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Lineup::ListenAddress).string().not_null())
                    .col(ColumnDef::new(Lineup::DiscoveryAddress).string().not_null())
                    .col(ColumnDef::new(Lineup::Port).integer().not_null())
                    .col(
                        ColumnDef::new(Lineup::Tuners)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Lineup::Manufacturer).string().not_null())
                    .col(ColumnDef::new(Lineup::ModelName).string().not_null())
                    .col(ColumnDef::new(Lineup::ModelNumber).string().not_null())
                    .col(ColumnDef::new(Lineup::FirmwareName).string().not_null())
                    .col(ColumnDef::new(Lineup::FirmwareVersion).string().not_null())
                    .col(ColumnDef::new(Lineup::DeviceId).string().not_null())
                    .col(ColumnDef::new(Lineup::DeviceAuth).string().not_null())
                    .col(ColumnDef::new(Lineup::DeviceUuid).string().not_null())
                    .col(timestamp_column(manager, Lineup::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Clients key discovered devices by UDN, so two lineups may never share one
        manager
            .create_index(
                Index::create()
                    .name("idx_lineup_device_uuid")
                    .table(Lineup::Table)
                    .col(Lineup::DeviceUuid)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lineup_ssdp")
                    .table(Lineup::Table)
                    .col(Lineup::Ssdp)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lineup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Lineup {
    Table,
    Id,
    Name,
    Ssdp,
    ListenAddress,
    DiscoveryAddress,
    Port,
    Tuners,
    Manufacturer,
    ModelName,
    ModelNumber,
    FirmwareName,
    FirmwareVersion,
    DeviceId,
    DeviceAuth,
    DeviceUuid,
    CreatedAt,
}
