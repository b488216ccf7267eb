use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_lineup::Lineup;
use super::timestamp_column;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LineupChannel::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LineupChannel::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LineupChannel::LineupId).integer().not_null())
                    .col(ColumnDef::new(LineupChannel::Title).string().not_null())
                    .col(ColumnDef::new(LineupChannel::ChannelNumber).string().not_null())
                    .col(
                        ColumnDef::new(LineupChannel::Hd)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LineupChannel::Favorite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LineupChannel::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(timestamp_column(manager, LineupChannel::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_channel_lineup_id")
                            .from(LineupChannel::Table, LineupChannel::LineupId)
                            .to(Lineup::Table, Lineup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lineup_channel_lineup_id")
                    .table(LineupChannel::Table)
                    .col(LineupChannel::LineupId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LineupChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LineupChannel {
    Table,
    Id,
    LineupId,
    Title,
    ChannelNumber,
    Hd,
    Favorite,
    Active,
    CreatedAt,
}
