use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::accounts;
use crate::audit::{self, AuditContext, Auditable};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(unique)]
    pub mobile_number: String,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: String,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Accounts,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Accounts => Entity::has_many(accounts::Entity).into() }
    }
}

impl Related<accounts::Entity> for Entity {
    fn to() -> RelationDef { Relation::Accounts.def() }
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

pub const MOBILE_NUMBER_LEN: usize = 10;
pub const NAME_MIN_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 30;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(ModelError::Validation(format!(
            "The length of the customer name should be between {NAME_MIN_LEN} and {NAME_MAX_LEN}"
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation("Email address should be a valid value".into());
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_mobile_number(mobile: &str) -> Result<(), ModelError> {
    if mobile.len() != MOBILE_NUMBER_LEN || !mobile.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModelError::Validation("Mobile number must be exactly 10 digits".into()));
    }
    Ok(())
}

pub async fn find_by_mobile_number<C: ConnectionTrait>(db: &C, mobile: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::MobileNumber.eq(mobile))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, customer_id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(customer_id).one(db).await?)
}

/// Stamp creation audit fields and insert; the id is assigned by the database.
pub async fn insert<C: ConnectionTrait>(db: &C, mut am: ActiveModel, ctx: &AuditContext) -> Result<Model, ModelError> {
    am.stamp_created(ctx);
    Ok(am.insert(db).await?)
}

/// Stamp update audit fields and write the changed columns.
pub async fn update<C: ConnectionTrait>(db: &C, mut am: ActiveModel, ctx: &AuditContext) -> Result<Model, ModelError> {
    am.stamp_updated(ctx);
    Ok(am.update(db).await?)
}

pub async fn delete_by_id<C: ConnectionTrait>(db: &C, customer_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(customer_id).exec(db).await?;
    Ok(res.rows_affected)
}
