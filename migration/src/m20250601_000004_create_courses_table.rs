use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Courses::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Courses::Slug).string_len(200).not_null())
                    .col(ColumnDef::new(Courses::Skill).string_len(100).not_null())
                    .col(ColumnDef::new(Courses::StreamId).uuid())
                    .col(ColumnDef::new(Courses::SubDomainId).uuid())
                    .col(ColumnDef::new(Courses::RoleId).uuid())
                    .col(ColumnDef::new(Courses::CourseType).string_len(10).not_null())
                    .col(ColumnDef::new(Courses::Amount).double())
                    .col(ColumnDef::new(Courses::Provider).string_len(100).not_null())
                    .col(ColumnDef::new(Courses::Duration).string_len(100))
                    .col(ColumnDef::new(Courses::Link).text().not_null())
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(
                        ColumnDef::new(Courses::ResourceLinks)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Courses::CertificateLinks)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Courses::TargetCompanies)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Courses::Level)
                            .string_len(20)
                            .not_null()
                            .default("Beginner"),
                    )
                    .col(
                        ColumnDef::new(Courses::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_stream_id")
                            .from(Courses::Table, Courses::StreamId)
                            .to(Streams::Table, Streams::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_sub_domain_id")
                            .from(Courses::Table, Courses::SubDomainId)
                            .to(SubDomains::Table, SubDomains::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_role_id")
                            .from(Courses::Table, Courses::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Paid courses always carry a positive amount
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE courses
                ADD CONSTRAINT chk_courses_paid_amount
                CHECK (course_type IN ('Free', 'Paid')
                       AND (course_type = 'Free' OR (amount IS NOT NULL AND amount > 0)));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_courses_role_id ON courses (role_id);
                CREATE INDEX idx_courses_sub_domain_id ON courses (sub_domain_id);
                CREATE INDEX idx_courses_skill ON courses (skill);
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
                DROP INDEX IF EXISTS idx_courses_role_id;
                DROP INDEX IF EXISTS idx_courses_sub_domain_id;
                DROP INDEX IF EXISTS idx_courses_skill;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
    Slug,
    Skill,
    StreamId,
    SubDomainId,
    RoleId,
    CourseType,
    Amount,
    Provider,
    Duration,
    Link,
    Description,
    ResourceLinks,
    CertificateLinks,
    TargetCompanies,
    Level,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Streams {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum SubDomains {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
}
