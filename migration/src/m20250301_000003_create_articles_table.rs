use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000001_create_topics_table::Topics, m20250301_000002_create_users_table::Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(pk_auto(Articles::ArticleId))
                    .col(string(Articles::Title))
                    .col(string(Articles::Topic))
                    .col(string(Articles::Author))
                    .col(text(Articles::Body))
                    .col(
                        timestamp_with_time_zone(Articles::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Articles::Votes).default(0))
                    .col(string(Articles::ArticleImgUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_topic")
                            .from(Articles::Table, Articles::Topic)
                            .to(Topics::Table, Topics::Slug)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_author")
                            .from(Articles::Table, Articles::Author)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Articles {
    Table,
    ArticleId,
    Title,
    Topic,
    Author,
    Body,
    CreatedAt,
    Votes,
    ArticleImgUrl,
}
