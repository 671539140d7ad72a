//! Declarative field rules and their evaluation.

use crate::model::{boolean_value, numeric_value};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Path parameter, e.g. `:id`.
    Params,
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Int,
    NotEmpty,
    Numeric,
    Positive,
    Boolean,
}

/// One predicate on one field, with the message reported when it fails.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub location: Location,
    pub field: &'static str,
    pub check: Check,
    pub msg: &'static str,
}

impl Rule {
    pub const fn param(field: &'static str, check: Check, msg: &'static str) -> Self {
        Rule {
            location: Location::Params,
            field,
            check,
            msg,
        }
    }

    pub const fn body(field: &'static str, check: Check, msg: &'static str) -> Self {
        Rule {
            location: Location::Body,
            field,
            check,
            msg,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    pub msg: String,
    pub param: String,
    pub location: Location,
}

/// Inputs the rules look at: path parameters and the parsed JSON body.
pub struct RequestFields<'a> {
    pub params: &'a HashMap<String, String>,
    pub body: &'a Value,
}

impl RequestFields<'_> {
    fn lookup(&self, location: Location, field: &str) -> Option<Value> {
        match location {
            Location::Params => self.params.get(field).map(|s| Value::String(s.clone())),
            Location::Body => self.body.get(field).cloned(),
        }
    }
}

/// Evaluate every rule in declaration order; one error per failing rule.
pub fn evaluate(rules: &[Rule], fields: &RequestFields<'_>) -> Vec<FieldError> {
    rules
        .iter()
        .filter_map(|rule| {
            let value = fields.lookup(rule.location, rule.field);
            if passes(rule.check, value.as_ref()) {
                return None;
            }
            Some(FieldError {
                value,
                msg: rule.msg.to_string(),
                param: rule.field.to_string(),
                location: rule.location,
            })
        })
        .collect()
}

fn passes(check: Check, value: Option<&Value>) -> bool {
    let Some(v) = value else {
        return false;
    };
    match check {
        Check::Int => match v {
            Value::String(s) => s.parse::<i64>().is_ok(),
            Value::Number(n) => n.is_i64(),
            _ => false,
        },
        Check::NotEmpty => match v {
            Value::String(s) => !s.trim().is_empty(),
            Value::Number(_) | Value::Bool(_) => true,
            _ => false,
        },
        Check::Numeric => numeric_value(v).is_some(),
        Check::Positive => numeric_value(v).is_some_and(|n| n > 0.0),
        Check::Boolean => boolean_value(v).is_some(),
    }
}
