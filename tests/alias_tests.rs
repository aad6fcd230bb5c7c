use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use typed_store::{StoreError, TypedStore};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Default)]
struct CellScratch {
    values: Vec<f64>,
    gradients: Vec<[f64; 2]>,
}

#[test]
fn test_alias_writes_reach_the_owner() -> Result<(), StoreError> {
    init_logging();
    let mut dofs = vec![0.0_f64; 3];

    let mut store = TypedStore::new();
    store.insert_alias(&mut dofs, "dofs");
    for (i, v) in store.get_mut::<Vec<f64>>("dofs")?.iter_mut().enumerate() {
        *v = i as f64;
    }
    drop(store);

    assert_eq!(dofs, vec![0.0, 1.0, 2.0]);
    Ok(())
}

#[test]
fn test_owner_writes_are_seen_through_alias() -> Result<(), StoreError> {
    init_logging();
    let mut scratch = CellScratch::default();
    scratch.values.push(0.5);

    {
        let mut store = TypedStore::new();
        store.insert_alias(&mut scratch, "scratch");
        assert_eq!(store.get::<CellScratch>("scratch")?.values, vec![0.5]);
        store
            .get_mut::<CellScratch>("scratch")?
            .gradients
            .push([1.0, 0.0]);
    }

    // An alias holds the borrow for the store's whole life, so the owner's
    // own writes show up in the next store that aliases the value.
    scratch.values.push(1.5);

    let mut store = TypedStore::new();
    store.insert_alias(&mut scratch, "scratch");
    let seen = store.get::<CellScratch>("scratch")?;
    assert_eq!(seen.values, vec![0.5, 1.5]);
    assert_eq!(seen.gradients, vec![[1.0, 0.0]]);
    Ok(())
}

#[test]
fn test_alias_and_copy_of_same_value() -> Result<(), StoreError> {
    init_logging();
    let mut counter = 1_u32;
    let copy = counter;

    let mut store = TypedStore::new();
    store.insert_owned(copy, "copy");
    store.insert_alias(&mut counter, "alias");

    *store.get_mut::<u32>("alias")? += 1;
    *store.get_mut::<u32>("copy")? += 10;

    assert_eq!(*store.get::<u32>("alias")?, 2);
    assert_eq!(*store.get::<u32>("copy")?, 11);
    drop(store);
    assert_eq!(counter, 2);
    Ok(())
}

#[test]
fn test_alias_type_mismatch() {
    init_logging();
    let mut samples = vec![1_i16, 2, 3];
    let mut store = TypedStore::new();
    store.insert_alias(&mut samples, "samples");

    assert!(matches!(
        store.get::<Vec<i32>>("samples"),
        Err(StoreError::TypeMismatch { .. })
    ));
    assert!(matches!(
        store.get_mut::<Box<Vec<i16>>>("samples"),
        Err(StoreError::TypeMismatch { .. })
    ));
}

#[test]
fn test_read_only_alias() -> Result<(), StoreError> {
    init_logging();
    let boundary_ids = vec![0_u8, 2];
    let mut store = TypedStore::new();
    store.insert_alias_ref(&boundary_ids, "boundary_ids");

    assert_eq!(store.get::<Vec<u8>>("boundary_ids")?, &boundary_ids);
    assert_eq!(store.with("boundary_ids", |ids: &Vec<u8>| ids.len())?, 2);

    let err = store
        .with_mut("boundary_ids", |ids: &mut Vec<u8>| ids.clear())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "Entry boundary_ids aliases a read-only {} and cannot be borrowed mutably",
            std::any::type_name::<Vec<u8>>()
        )
    );

    // Replacing the read-only alias with an owned value makes it writable.
    store.insert_owned(vec![7_u8], "boundary_ids");
    store.get_mut::<Vec<u8>>("boundary_ids")?.push(8);
    assert_eq!(store.get::<Vec<u8>>("boundary_ids")?, &vec![7, 8]);
    assert_eq!(boundary_ids, vec![0, 2]);
    Ok(())
}

#[test]
fn test_owned_replaced_by_alias_is_dropped() -> Result<(), StoreError> {
    init_logging();
    let handle = Arc::new(vec![0.25_f64; 4]);
    let mut x = 1_u8;

    let mut store = TypedStore::new();
    store.insert_owned(Arc::clone(&handle), "k");
    assert_eq!(Arc::strong_count(&handle), 2);

    store.insert_alias(&mut x, "k");
    assert_eq!(Arc::strong_count(&handle), 1);
    assert_eq!(*store.get::<u8>("k")?, 1);
    assert_eq!(store.is_aliased("k"), Some(true));
    assert!(matches!(
        store.get::<Arc<Vec<f64>>>("k"),
        Err(StoreError::TypeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_replaced_alias_leaves_owner_value() -> Result<(), StoreError> {
    init_logging();
    let handle = Arc::new(3_i32);
    let mut store = TypedStore::new();

    store.insert_alias_ref(&handle, "k");
    assert_eq!(**store.get::<Arc<i32>>("k")?, 3);
    store.insert_owned("replacement".to_string(), "k");

    // Only the borrow went away; the alias never held a count of its own.
    assert_eq!(Arc::strong_count(&handle), 1);
    assert_eq!(*handle, 3);
    Ok(())
}

#[test]
fn test_live_sharing_through_owned_rc() -> Result<(), StoreError> {
    init_logging();
    let residual = Rc::new(RefCell::new(vec![0.0_f64; 2]));

    let mut store = TypedStore::new();
    store.insert_owned(Rc::clone(&residual), "residual");

    // Unlike an alias, the owner keeps access while the store is alive.
    residual.borrow_mut()[0] = 1.0;
    store.with("residual", |r: &Rc<RefCell<Vec<f64>>>| r.borrow_mut()[1] = 2.0)?;

    assert_eq!(*residual.borrow(), vec![1.0, 2.0]);
    assert_eq!(
        *store.get::<Rc<RefCell<Vec<f64>>>>("residual")?.borrow(),
        vec![1.0, 2.0]
    );
    Ok(())
}
