use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lineup_channel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lineup_id: i32,
    pub title: String,
    pub channel_number: String,
    pub hd: bool,
    pub favorite: bool,
    pub active: bool,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lineup::Entity",
        from = "Column::LineupId",
        to = "super::lineup::Column::Id",
        on_delete = "Cascade"
    )]
    Lineup,
}

impl Related<super::lineup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lineup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
