//! Shared target and mutation types.

use docshape_core::{field_value, shape};
use serde::Serialize;

/// Basic target: one number, one string, one sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Data {
    pub number: i64,
    pub text: String,
    pub ints: Vec<i32>,
}

shape!(Data { number, text, ints });

/// Target with explicit wire names and a field kept off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WireData {
    pub number: i64,
    pub text: String,
    pub secret: String,
}

shape!(WireData {
    number [wire = "numInBson"],
    text [wire = "tExTiNbSoN,omitempty"],
    secret [wire = "-"],
});

#[derive(Debug, Clone, Default)]
pub struct IncNumber {
    pub number: i64,
}

shape!(IncNumber {
    number [mutation = ",inc"],
});

#[derive(Debug, Clone, Default)]
pub struct SetText {
    pub value: String,
}

shape!(SetText {
    value [mutation = "text"],
});

#[derive(Debug, Clone, Default)]
pub struct SetTextOmitEmpty {
    pub value: String,
}

shape!(SetTextOmitEmpty {
    value [mutation = "text,set,omitempty"],
});

#[derive(Debug, Clone, Default)]
pub struct PushInt {
    pub value: i32,
}

shape!(PushInt {
    value [mutation = "ints,push"],
});

#[derive(Debug, Clone, Default)]
pub struct PushInts {
    pub values: Vec<i32>,
}

shape!(PushInts {
    values [mutation = "ints,push"],
});

/// Sets `text`, then names a kind nobody registered.
#[derive(Debug, Clone, Default)]
pub struct SetThenUnknown {
    pub text: String,
    pub number: i64,
}

shape!(SetThenUnknown {
    text,
    number [mutation = ",mul"],
});

/// Audit columns shared by several documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Audit {
    pub revision: u64,
    pub editor: String,
}

field_value!(Audit);
shape!(Audit { revision, editor });

/// Target embedding [`Audit`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    #[serde(flatten)]
    pub audit: Audit,
}

shape!(Article {
    title,
    embed audit,
});

/// Mutation bumping the embedded revision and naming the editor.
#[derive(Debug, Clone, Default)]
pub struct Revise {
    pub bump: u64,
    pub editor: String,
}

shape!(Revise {
    bump [mutation = "revision,inc"],
    editor [mutation = ",,omitempty"],
});
