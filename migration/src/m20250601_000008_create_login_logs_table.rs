use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoginLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // Null for attempts against an unknown email
                    .col(ColumnDef::new(LoginLogs::UserId).uuid())
                    .col(ColumnDef::new(LoginLogs::Email).string_len(255).not_null())
                    .col(ColumnDef::new(LoginLogs::UserName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(LoginLogs::LoginTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(LoginLogs::IpAddress).string_len(64))
                    .col(ColumnDef::new(LoginLogs::UserAgent).text())
                    .col(ColumnDef::new(LoginLogs::Status).string_len(10).not_null())
                    .col(ColumnDef::new(LoginLogs::FailureReason).string_len(100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_login_logs_user_id")
                            .from(LoginLogs::Table, LoginLogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_login_logs_login_time
                ON login_logs (login_time DESC);
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
                DROP INDEX IF EXISTS idx_login_logs_login_time;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LoginLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LoginLogs {
    Table,
    Id,
    UserId,
    Email,
    UserName,
    LoginTime,
    IpAddress,
    UserAgent,
    Status,
    FailureReason,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
