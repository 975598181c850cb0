use colspec_core::schema::{Entity, Field, FieldRole, Schema, Type};

use pretty_assertions::assert_eq;

fn user() -> Entity {
    Entity::new(
        "User",
        vec![Field::primary_key("id"), Field::column("userName")],
    )
}

fn post() -> Entity {
    Entity::new("Post", vec![Field::primary_key("id"), Field::column("body")])
}

#[test]
fn builds_schema_in_declaration_order() {
    let schema = Schema::from_entities([user(), post()]).unwrap();

    let keys: Vec<_> = schema.entities.keys().cloned().collect();
    assert_eq!(keys, ["user", "post"]);
    assert!(schema.entity("user").is_some());
    assert!(schema.entity("comment").is_none());
}

#[test]
fn entity_lookup_surfaces() {
    let entity = user();
    assert_eq!(entity.table_name(), "user");
    assert_eq!(entity.primary_key().unwrap().name, "id");
    assert!(entity.field("userName").is_some());
    assert!(entity.field("user_name").is_none());
}

#[test]
fn rejects_duplicate_entity_names() {
    // `UserAccount` and `user_account` normalize to the same table name.
    let a = Entity::new("UserAccount", vec![Field::primary_key("id")]);
    let b = Entity::new("user_account", vec![Field::primary_key("id")]);

    let err = Schema::from_entities([a, b]).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn rejects_duplicate_column_names() {
    // Both field names map to the `user_name` column.
    let entity = Entity::new(
        "User",
        vec![Field::column("userName"), Field::column("user_name")],
    );

    let err = Schema::from_entities([entity]).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn rejects_multiple_primary_keys() {
    let entity = Entity::new(
        "User",
        vec![Field::primary_key("id"), Field::primary_key("altId")],
    );

    let err = Schema::from_entities([entity]).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn rejects_auto_increment_on_non_integer_key() {
    let entity = Entity::new(
        "Session",
        vec![Field::with_role(
            "token",
            FieldRole::PrimaryKey {
                ty: Type::Varchar,
                length: 36,
                auto_increment: true,
            },
        )],
    );

    let err = Schema::from_entities([entity]).unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("Session::token"));
}

#[test]
fn allows_auto_increment_on_bigint_key() {
    let entity = Entity::new(
        "Event",
        vec![Field::with_role(
            "id",
            FieldRole::PrimaryKey {
                ty: Type::BigInt,
                length: 255,
                auto_increment: true,
            },
        )],
    );

    assert!(Schema::from_entities([entity]).is_ok());
}
