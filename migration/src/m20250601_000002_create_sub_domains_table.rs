use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubDomains::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubDomains::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SubDomains::StreamId).uuid().not_null())
                    .col(ColumnDef::new(SubDomains::Name).string_len(150).not_null())
                    .col(
                        ColumnDef::new(SubDomains::Slug)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SubDomains::Description).text())
                    .col(
                        ColumnDef::new(SubDomains::RecommendedCertifications)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(SubDomains::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SubDomains::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // A stream with sub-domains cannot be deleted
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_domains_stream_id")
                            .from(SubDomains::Table, SubDomains::StreamId)
                            .to(Streams::Table, Streams::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_sub_domains_stream_id
                ON sub_domains (stream_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_sub_domains_stream_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SubDomains::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SubDomains {
    Table,
    Id,
    StreamId,
    Name,
    Slug,
    Description,
    RecommendedCertifications,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Streams {
    Table,
    Id,
}
