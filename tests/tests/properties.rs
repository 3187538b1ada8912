//! Behavior shared by the apply and render paths.

use docshape_tests::prelude::*;
use pretty_assertions::assert_eq;

/// Target fields changed by applying `mutation`, sorted.
fn applied_fields<M: Shape>(engine: &MutationEngine, mutation: &M) -> Vec<String> {
    let before = Data {
        number: 1,
        text: "x".into(),
        ints: vec![1],
    };
    let mut after = before.clone();
    engine.apply(&mut after, mutation).unwrap();

    let mut touched = Vec::new();
    if after.number != before.number {
        touched.push("number");
    }
    if after.text != before.text {
        touched.push("text");
    }
    if after.ints != before.ints {
        touched.push("ints");
    }
    let mut touched: Vec<String> = touched.into_iter().map(String::from).collect();
    touched.sort();
    touched
}

/// Wire fields named in the rendered document, across operators.
fn rendered_fields<M: Shape>(engine: &MutationEngine, mutation: &M) -> Vec<String> {
    let document = engine.render::<Data, M>(mutation).unwrap().into_value();
    let mut fields: Vec<String> = document
        .as_object()
        .into_iter()
        .flat_map(|ops| ops.values())
        .filter_map(|fields| fields.as_object())
        .flat_map(|fields| fields.keys().cloned())
        .collect();
    fields.sort();
    fields
}

#[derive(Debug, Default)]
struct Everything {
    number: i64,
    text: String,
    ints: Vec<i32>,
}

shape!(Everything {
    number [mutation = ",inc,omitempty"],
    text [mutation = ",set,omitempty"],
    ints [mutation = ",push,omitempty"],
});

#[test]
fn test_apply_and_render_agree_on_participating_fields() {
    let engine = MutationEngine::new();
    let cases = [
        Everything::default(),
        Everything {
            number: 3,
            ..Default::default()
        },
        Everything {
            text: "y".into(),
            ints: vec![2],
            ..Default::default()
        },
        Everything {
            number: 1,
            text: "z".into(),
            ints: vec![5, 6],
        },
    ];

    for mutation in &cases {
        let applied = applied_fields(&engine, mutation);
        let rendered = rendered_fields(&engine, mutation);
        assert_eq!(applied, rendered, "mutation {:?}", mutation);
    }
}

#[test]
fn test_increment_is_associative() {
    let engine = MutationEngine::new();
    let (v1, v2) = (17, -5);

    let mut stepwise = Data {
        number: 100,
        ..Default::default()
    };
    engine.apply(&mut stepwise, &IncNumber { number: v1 }).unwrap();
    engine.apply(&mut stepwise, &IncNumber { number: v2 }).unwrap();

    let mut combined = Data {
        number: 100,
        ..Default::default()
    };
    engine
        .apply(&mut combined, &IncNumber { number: v1 + v2 })
        .unwrap();

    assert_eq!(stepwise.number, 100 + v1 + v2);
    assert_eq!(stepwise, combined);
}

#[test]
fn test_push_scalar_equals_one_element_sequence() {
    let engine = MutationEngine::new();
    let start = Data {
        ints: vec![1, 2, 3],
        ..Default::default()
    };

    let mut scalar = start.clone();
    engine.apply(&mut scalar, &PushInt { value: 9 }).unwrap();
    let mut wrapped = start.clone();
    engine
        .apply(&mut wrapped, &PushInts { values: vec![9] })
        .unwrap();

    assert_eq!(scalar, wrapped);
    assert_eq!(
        engine.render::<Data, _>(&PushInt { value: 9 }).unwrap(),
        engine.render::<Data, _>(&PushInts { values: vec![9] }).unwrap()
    );
}

#[test]
fn test_inc_overflow_is_reported() {
    let engine = MutationEngine::new();
    let mut data = Data {
        number: i64::MAX,
        ..Default::default()
    };

    let err = engine.apply(&mut data, &IncNumber { number: 1 }).unwrap_err();

    assert!(matches!(err, MutationError::NumericOverflow { .. }));
    assert_eq!(data.number, i64::MAX);
}

#[test]
fn test_custom_config_changes_omit_argument() {
    #[derive(Debug, Default)]
    struct Sparse {
        text: String,
    }
    shape!(Sparse {
        text [mutation = ",,skipzero"],
    });

    let engine = MutationEngine::builder()
        .config(EngineConfig::new().with_omit_empty_arg("skipzero"))
        .build();
    let mut data = Data {
        text: "keep".into(),
        ..Default::default()
    };

    engine.apply(&mut data, &Sparse::default()).unwrap();

    assert_eq!(data.text, "keep");
    assert!(engine.render::<Data, _>(&Sparse::default()).unwrap().is_empty());
}
