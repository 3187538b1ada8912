//! Filters, orderings and pages built together, the way a listing endpoint
//! would.

use docshape_query::{
    OrderField, OrderFields, OrderSchema, OrderSchemaFactory, Pagination, PaginationConfig, Query,
    QueryError, QueryRenderer,
};
use docshape_tests::prelude::*;
use pretty_assertions::assert_eq;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct Timestamps {
    created: i64,
    updated: i64,
}

field_value!(Timestamps);
shape!(Timestamps {
    created [wire = "createdAt"],
    updated [wire = "updatedAt", order = "-"],
});

#[derive(Debug, Default)]
struct Listing {
    title: String,
    price: u64,
    owner_token: String,
    stamps: Timestamps,
}

shape!(Listing {
    title,
    price [order = "cost"],
    owner_token [wire = ""],
    embed stamps,
});

#[test]
fn test_ordering_scenario() {
    let schema = OrderSchema::new().with_field("created", "createdAt");

    let fields: OrderFields = "-created".parse().unwrap();
    schema.validate(&fields).unwrap();
    assert_eq!(
        schema.process(&fields),
        OrderFields::from(vec![OrderField::desc("createdAt")])
    );

    let twice: OrderFields = "+created +created".parse().unwrap();
    assert!(matches!(
        schema.validate(&twice),
        Err(QueryError::FieldTwice { .. })
    ));
}

#[test]
fn test_listing_request() {
    // GIVEN
    let factory = OrderSchemaFactory::new();
    let schema = factory.schema_for::<Listing>().unwrap();
    let requested: OrderFields = "-cost +created".parse().unwrap();
    let page = PaginationConfig::default().clamp(Pagination::new(40, 1000));

    // WHEN
    schema.validate(&requested).unwrap();
    let sort = schema.process(&requested).sort_document();
    let filter = QueryRenderer::new()
        .render(&Query::and([
            Query::gte("price", 10),
            Query::not(Query::eq("title", "")),
        ]))
        .unwrap();

    // THEN
    assert_eq!(sort, json!({"price": -1, "createdAt": 1}));
    assert_eq!(
        filter,
        json!({"$and": [
            {"price": {"$gte": 10}},
            {"$nor": [{"title": {"$eq": ""}}]}
        ]})
    );
    assert_eq!(page, Pagination::new(40, 100));
}

#[test]
fn test_factory_excludes_hidden_fields() {
    let schema = OrderSchemaFactory::new().schema_for::<Listing>().unwrap();

    for hidden in ["owner_token", "updated", "price"] {
        let fields = OrderFields::from(vec![OrderField::asc(hidden)]);
        assert!(
            matches!(schema.validate(&fields), Err(QueryError::InvalidOrderFields { .. })),
            "{hidden} should not be orderable"
        );
    }
    assert_eq!(schema.len(), 3);
}

#[test]
fn test_order_text_round_trip() {
    let fields = OrderFields::from(vec![
        OrderField::asc("title"),
        OrderField::desc("created"),
    ]);

    let parsed: OrderFields = fields.to_string().parse().unwrap();

    assert_eq!(parsed, fields);
}
