//! Name parsing command

use anyhow::Result;
use tracing::debug;

use super::output::Output;
use crate::domain::{LongNamePolicy, Person};

pub fn run(output: &Output, full_name: &str, policy: LongNamePolicy) -> Result<()> {
    debug!(full_name, policy = policy.as_str(), "parsing name");
    let person = Person::with_policy(full_name, policy)?;

    if output.is_json() {
        output.data(&person);
    } else {
        output.row(&["first", person.first_name()]);
        output.row(&["middle", person.middle_name().unwrap_or("-")]);
        output.row(&["last", person.last_name().unwrap_or("-")]);
    }

    Ok(())
}
