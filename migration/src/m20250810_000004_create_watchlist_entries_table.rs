use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatchlistEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WatchlistEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WatchlistEntries::UserId).uuid().not_null())
                    .col(ColumnDef::new(WatchlistEntries::MovieId).uuid().not_null())
                    .col(
                        ColumnDef::new(WatchlistEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watchlist_entries_user")
                            .from(WatchlistEntries::Table, WatchlistEntries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watchlist_entries_movie")
                            .from(WatchlistEntries::Table, WatchlistEntries::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Application code does lookup-before-insert; the index is a backstop
        // against racing inserts of the same pair.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_watchlist_entries_user_movie")
                    .table(WatchlistEntries::Table)
                    .col(WatchlistEntries::UserId)
                    .col(WatchlistEntries::MovieId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WatchlistEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WatchlistEntries {
    Table,
    Id,
    UserId,
    MovieId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
}
