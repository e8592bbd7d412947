use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Otps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Otps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // 每个客户端会话至多一条 OTP 记录
                    .col(
                        ColumnDef::new(Otps::ClientId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Otps::Otp).string_len(7).not_null())
                    .col(
                        ColumnDef::new(Otps::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Otps::Status)
                            .string_len(16)
                            .not_null()
                            .default("valid"),
                    )
                    .col(
                        ColumnDef::new(Otps::WrongAttempt)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Otps::SendAttempt)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_otps_client_id")
                            .from(Otps::Table, Otps::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .name("idx_otps_status")
                    .table(Otps::Table)
                    .col(Otps::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Otps::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Otps {
    Table,
    Id,
    ClientId,
    Otp,
    CreatedAt,
    Status,
    WrongAttempt,
    SendAttempt,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}
