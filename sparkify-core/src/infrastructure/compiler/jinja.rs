// sparkify-core/src/infrastructure/compiler/jinja.rs

// Turns the COPY templates ({{ log_data }}, {{ iam_role_arn }} ...) into
// statements the warehouse can run.

use crate::application::ports::TemplateEngine;
use crate::error::SparkifyError;
use crate::infrastructure::error::InfrastructureError;
use minijinja::{Environment, UndefinedBehavior};

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

/// Escapes a value for use inside a single-quoted SQL literal.
fn sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Redshift also reads backslash as an escape inside string literals.
fn redshift_literal(value: &str) -> String {
    sql_literal(&value.replace('\\', "\\\\"))
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // A missing config value must not silently become ''.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("sql_literal", sql_literal);
        env.add_filter("redshift_literal", redshift_literal);
        Self { env }
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, SparkifyError> {
        self.env
            .render_str(template, context)
            .map_err(|e| SparkifyError::Infrastructure(InfrastructureError::TemplateError(e)))
    }
}
