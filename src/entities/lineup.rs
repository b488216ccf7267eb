use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lineup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub ssdp: bool,
    pub listen_address: String,
    pub discovery_address: String,
    pub port: i32,
    pub tuners: i32,
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub firmware_name: String,
    pub firmware_version: String,
    pub device_id: String,
    pub device_auth: String,
    #[sea_orm(unique)]
    pub device_uuid: String,
    pub created_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lineup_channel::Entity")]
    LineupChannel,
}

impl Related<super::lineup_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineupChannel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
