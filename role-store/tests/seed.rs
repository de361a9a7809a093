use role_store::{Config, DbService, ensure_default_roles};
use shared::models::{EmployeeRole, Role};

#[tokio::test]
async fn seeds_every_role_once() {
    let repo = DbService::connect(&Config::in_memory())
        .await
        .unwrap()
        .role_repository();

    let first = ensure_default_roles(&repo).await.unwrap();
    let names: Vec<_> = first.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        EmployeeRole::ALL.into_iter().map(Some).collect::<Vec<_>>()
    );
    assert!(first.iter().all(Role::is_persisted));

    let second = ensure_default_roles(&repo).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(repo.find_all().await.unwrap().len(), EmployeeRole::ALL.len());
}

#[tokio::test]
async fn keeps_existing_roles() {
    let repo = DbService::connect(&Config::in_memory())
        .await
        .unwrap()
        .role_repository();

    let admin = repo.save(Role::new(EmployeeRole::Admin)).await.unwrap();

    let seeded = ensure_default_roles(&repo).await.unwrap();
    assert_eq!(seeded.last(), Some(&admin));
    assert_eq!(repo.find_all().await.unwrap().len(), 3);
}
