use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};

use super::{ctx, new_customer, setup_test_db};
use crate::{accounts, customer, errors::ModelError};

#[tokio::test]
async fn duplicate_mobile_number_is_rejected_by_the_store() -> Result<()> {
    let db = setup_test_db().await?;
    customer::insert(&db, new_customer("Alice", "1234567890"), &ctx()).await?;

    let err = customer::insert(&db, new_customer("Bobby", "1234567890"), &ctx())
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)), "unexpected error: {err:?}");
    assert_eq!(customer::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn duplicate_account_number_is_rejected_by_the_store() -> Result<()> {
    let db = setup_test_db().await?;
    let c = customer::insert(&db, new_customer("Alice", "1234567890"), &ctx()).await?;
    accounts::insert(&db, accounts::new_savings(c.customer_id, 1_111_111_111), &ctx()).await?;

    let err = accounts::insert(&db, accounts::new_savings(c.customer_id, 1_111_111_111), &ctx())
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)), "unexpected error: {err:?}");
    Ok(())
}

#[tokio::test]
async fn rollback_discards_customer_and_account() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let c = customer::insert(&txn, new_customer("Alice", "1234567890"), &ctx()).await?;
    accounts::insert(&txn, accounts::new_savings(c.customer_id, 1_222_222_222), &ctx()).await?;
    txn.rollback().await?;

    assert!(customer::find_by_mobile_number(&db, "1234567890").await?.is_none());
    assert!(!accounts::exists(&db, 1_222_222_222).await?);
    Ok(())
}

#[tokio::test]
async fn commit_persists_both_rows() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let c = customer::insert(&txn, new_customer("Alice", "1234567890"), &ctx()).await?;
    accounts::insert(&txn, accounts::new_savings(c.customer_id, 1_333_333_333), &ctx()).await?;
    txn.commit().await?;

    let acc = accounts::find_by_customer_id(&db, c.customer_id).await?.unwrap();
    assert_eq!(acc.account_number, 1_333_333_333);
    Ok(())
}
