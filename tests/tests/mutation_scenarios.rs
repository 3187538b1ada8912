//! Mutation scenarios against live targets.

use docshape_tests::prelude::*;

mod increment {
    use super::*;

    pub fn scenario() -> Scenario<Data> {
        let target = Data {
            number: 31,
            text: "fdsa".into(),
            ..Default::default()
        };
        Scenario::new("increment", target)
            .apply_and_render("inc_number", IncNumber { number: 11 }, |a| {
                a.target(json!({"number": 42, "text": "fdsa", "ints": []}))
                    .document(json!({"$inc": {"number": 11}}))
            })
            .apply("inc_negative", IncNumber { number: -50 }, |a| {
                a.field("number", json!(-8))
            })
    }

    #[test]
    fn test_increment_number() {
        init_tracing();
        scenario().run().unwrap();
    }
}

mod push {
    use super::*;

    pub fn scenario() -> Scenario<Data> {
        let target = Data {
            ints: vec![1, 2, 3],
            ..Default::default()
        };
        Scenario::new("push", target)
            .apply_and_render("push_scalar", PushInt { value: 4 }, |a| {
                a.field("ints", json!([1, 2, 3, 4]))
                    .document(json!({"$push": {"ints": {"$each": [4]}}}))
            })
            .apply_and_render("push_many", PushInts { values: vec![5, 6] }, |a| {
                a.field("ints", json!([1, 2, 3, 4, 5, 6]))
                    .document(json!({"$push": {"ints": {"$each": [5, 6]}}}))
            })
            .apply("push_nothing", PushInts::default(), |a| a.unchanged())
    }

    #[test]
    fn test_push_elements() {
        let target = scenario().run().unwrap();
        assert_eq!(target.ints, vec![1, 2, 3, 4, 5, 6]);
    }
}

mod wire_names {
    use super::*;

    #[derive(Debug, Default)]
    struct Update {
        number: i64,
        text: String,
    }

    shape!(Update {
        number [mutation = ",inc"],
        text,
    });

    #[derive(Debug, Default)]
    struct Reveal {
        secret: String,
    }

    shape!(Reveal { secret });

    pub fn scenario() -> Scenario<WireData> {
        Scenario::new("wire_names", WireData::default())
            .render(
                "render_wire_names",
                Update {
                    number: 2,
                    text: "asdf".into(),
                },
                |a| {
                    a.document(json!({
                        "$inc": {"numInBson": 2},
                        "$set": {"tExTiNbSoN": "asdf"}
                    }))
                    .operators(&["$set", "$inc"])
                    .unchanged()
                },
            )
            .render("render_skipped", Reveal { secret: "x".into() }, |a| {
                a.error_matches(r"Field secret of type .*WireData is excluded")
            })
            .apply("apply_skipped", Reveal { secret: "x".into() }, |a| {
                a.error("excluded from mutation").unchanged()
            })
    }

    #[test]
    fn test_wire_names_and_skips() {
        scenario().run().unwrap();
    }
}

mod failures {
    use super::*;

    #[derive(Debug, Default)]
    struct IncText {
        text: i64,
    }

    shape!(IncText {
        text [mutation = ",inc"],
    });

    #[derive(Debug, Default)]
    struct IncTwice {
        first: i64,
        second: i64,
    }

    shape!(IncTwice {
        first [mutation = "number,inc"],
        second [mutation = "number,inc"],
    });

    #[derive(Debug, Default)]
    struct Stray {
        nowhere: bool,
    }

    shape!(Stray { nowhere });

    pub fn scenario() -> Scenario<Data> {
        Scenario::new("failures", Data::default())
            .apply(
                "unknown_kind_keeps_prefix",
                SetThenUnknown {
                    text: "applied".into(),
                    number: 7,
                },
                |a| {
                    a.error("Mutation mul is not registered")
                        .field("text", json!("applied"))
                        .field("number", json!(0))
                },
            )
            .apply("inc_on_string", IncText { text: 1 }, |a| {
                a.error_matches(r"^Mutation inc on field text needs numbers")
                    .unchanged()
            })
            .render("unknown_target", Stray { nowhere: true }, |a| {
                a.error("Field nowhere is not available")
            })
            .apply_and_render("one_wire_field_twice", IncTwice { first: 1, second: 2 }, |a| {
                a.error("Wire field number of type")
                    .error_matches(r"targeted by more than one mutation field$")
                    .unchanged()
            })
    }

    #[test]
    fn test_failures_are_reported() {
        scenario().run().unwrap();
    }
}

mod omit_empty {
    use super::*;

    pub fn scenario() -> Scenario<Data> {
        let target = Data {
            text: "keep".into(),
            ..Default::default()
        };
        Scenario::new("omit_empty", target)
            .apply_and_render("empty_value_omitted", SetTextOmitEmpty::default(), |a| {
                a.unchanged().empty_document()
            })
            .apply_and_render("empty_value_without_omit", SetText::default(), |a| {
                a.field("text", json!("")).document(json!({"$set": {"text": ""}}))
            })
            .apply_and_render(
                "value_applied",
                SetTextOmitEmpty {
                    value: "new".into(),
                },
                |a| a.field("text", json!("new")).operators(&["$set"]),
            )
    }

    #[test]
    fn test_omit_empty() {
        scenario().run().unwrap();
    }
}

mod embedding {
    use super::*;

    pub fn scenario() -> Scenario<Article> {
        Scenario::new("embedding", Article::default())
            .apply_and_render(
                "revise",
                Revise {
                    bump: 1,
                    editor: "ann".into(),
                },
                |a| {
                    a.target(json!({"title": "", "revision": 1, "editor": "ann"}))
                        .document(json!({
                            "$inc": {"revision": 1},
                            "$set": {"editor": "ann"}
                        }))
                },
            )
            .apply_and_render("bump_only", Revise { bump: 2, ..Default::default() }, |a| {
                a.field("revision", json!(3))
                    .field("editor", json!("ann"))
                    .document(json!({"$inc": {"revision": 2}}))
            })
    }

    #[test]
    fn test_embedded_target_fields() {
        let article = scenario().run().unwrap();
        assert_eq!(article.audit.revision, 3);
    }
}
