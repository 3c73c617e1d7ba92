//! Signup form walkthrough: change, submit, fix, resubmit.
//!
//! Debug events from the reducer and validator are printed by the fmt subscriber.

use formstate_validator::prelude::*;
use serde_json::{Value, json};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let schema = Schema::new([
        FieldDecl::new("username", json!(""))
            .required(true)
            .validator(Validator::pattern(r"^.{3,}$", "At least 3 characters.")?)
            .validator(Validator::pattern(r"^[a-z0-9_]+$", "Lowercase letters, digits and _ only.")?),
        FieldDecl::new("age", json!(0)).validator(Validator::predicate(
            |value: &Value, _: &FieldMap| value.as_i64().is_some_and(|n| (0..=100).contains(&n)),
            "This field must be between 0 and 100.",
        )),
        FieldDecl::new("newsletter", json!(false)),
        FieldDecl::new("email", json!(""))
            .required_when(|_: &Value, fields: &FieldMap| {
                fields.value("newsletter") == Some(&json!(true))
            })
            .required_error("We need an email to send the newsletter."),
    ])?;

    let options: FormOptions = serde_json::from_value(json!({ "resetOnSubmit": true }))?;
    let mut form = Form::with_options(schema, options);

    form.change("username", "Al");
    form.change("age", 130);
    form.change("newsletter", true);

    if form.submit(|_| {}) == SubmitOutcome::Rejected {
        for (name, state) in form.fields().iter().filter(|(_, s)| !s.is_valid()) {
            println!("✗ {name}: {}", state.error);
        }
    }

    form.change("username", "al_1990");
    form.change("age", 34);
    form.change("email", "al@example.com");

    let outcome = form.submit(|fields| {
        println!("✓ submitted {}", Value::Object(fields.extract_values()));
    });
    println!("outcome: {outcome:?}, fields after reset: {}", Value::Object(form.values()));

    Ok(())
}
