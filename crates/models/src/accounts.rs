use rand::Rng;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::audit::{self, AuditContext, Auditable};
use crate::customer;
use crate::errors::ModelError;

pub const SAVINGS: &str = "SAVINGS";
pub const DEFAULT_BRANCH_ADDRESS: &str = "123 Main Street, New York";

/// Account numbers are 10-digit values in `[ACCOUNT_NUMBER_MIN, ACCOUNT_NUMBER_MAX]`.
pub const ACCOUNT_NUMBER_MIN: i64 = 1_000_000_000;
pub const ACCOUNT_NUMBER_MAX: i64 = 1_899_999_999;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_number: i64,
    pub customer_id: i32,
    pub account_type: String,
    pub branch_address: String,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: String,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::CustomerId)
                .into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Auditable for ActiveModel {
    fn stamp_created(&mut self, ctx: &AuditContext) {
        self.created_at = Set(audit::now());
        self.created_by = Set(ctx.actor.clone());
    }

    fn stamp_updated(&mut self, ctx: &AuditContext) {
        self.updated_at = Set(Some(audit::now()));
        self.updated_by = Set(Some(ctx.actor.clone()));
    }
}

/// Draw a candidate account number. Uniqueness is checked by the caller.
pub fn random_account_number<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(ACCOUNT_NUMBER_MIN..=ACCOUNT_NUMBER_MAX)
}

/// New savings account for `customer_id` with the default branch.
pub fn new_savings(customer_id: i32, account_number: i64) -> ActiveModel {
    ActiveModel {
        account_number: Set(account_number),
        customer_id: Set(customer_id),
        account_type: Set(SAVINGS.to_string()),
        branch_address: Set(DEFAULT_BRANCH_ADDRESS.to_string()),
        ..Default::default()
    }
}

pub async fn find_by_account_number<C: ConnectionTrait>(db: &C, account_number: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(account_number).one(db).await?)
}

pub async fn find_by_customer_id<C: ConnectionTrait>(db: &C, customer_id: i32) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::CustomerId.eq(customer_id))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn exists<C: ConnectionTrait>(db: &C, account_number: i64) -> Result<bool, ModelError> {
    Ok(find_by_account_number(db, account_number).await?.is_some())
}

pub async fn insert<C: ConnectionTrait>(db: &C, mut am: ActiveModel, ctx: &AuditContext) -> Result<Model, ModelError> {
    am.stamp_created(ctx);
    Ok(am.insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(db: &C, mut am: ActiveModel, ctx: &AuditContext) -> Result<Model, ModelError> {
    am.stamp_updated(ctx);
    Ok(am.update(db).await?)
}

/// Remove every account owned by `customer_id`; returns the number of rows removed.
pub async fn delete_by_customer_id<C: ConnectionTrait>(db: &C, customer_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::CustomerId.eq(customer_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
