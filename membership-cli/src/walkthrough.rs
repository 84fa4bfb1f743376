//! The classic eight-step membership walkthrough.
//!
//! Steps run in order against one server. A failing step is reported and
//! the walkthrough moves on, so a half-configured server still shows which
//! operations work.

use membership_core::{HttpResponse, MembershipClient, Reply};

use crate::error::CliError;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u32,
    pub action: Action,
    pub key: &'static str,
    pub value: Option<&'static str>,
}

const fn step(number: u32, action: Action, key: &'static str, value: Option<&'static str>) -> Step {
    Step {
        number,
        action,
        key,
        value,
    }
}

pub const STEPS: &[Step] = &[
    step(1, Action::Read, "0001", None),
    step(2, Action::Create, "0001", Some("apple")),
    step(3, Action::Read, "0001", None),
    step(4, Action::Create, "0001", Some("xpple")),
    step(5, Action::Update, "0002", Some("xrange")),
    step(6, Action::Create, "0002", Some("xrange")),
    step(6, Action::Update, "0002", Some("orange")),
    step(7, Action::Delete, "0001", None),
    step(8, Action::Delete, "0001", None),
];

/// What one step produced.
#[derive(Debug)]
pub struct StepReport {
    pub step: Step,
    pub status: Option<u16>,
    pub body: Option<String>,
    pub result: Result<Reply, CliError>,
}

impl std::fmt::Display for StepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.step.number;
        match (&self.result, self.status, &self.body) {
            (Ok(reply), Some(status), Some(body)) => {
                write!(f, "#{n} Code: {status} >> JSON: {body} >> Result: {reply}")
            }
            (Err(err), Some(status), Some(body)) => {
                write!(f, "#{n} Code: {status} >> Raw Body: {body} >> Error: {err}")
            }
            (Err(err), _, _) => write!(f, "#{n} Error: {err}"),
            (Ok(reply), _, _) => write!(f, "#{n} Result: {reply}"),
        }
    }
}

pub fn run_step<T: Transport>(client: &MembershipClient, transport: &T, step: Step) -> StepReport {
    let value = step.value.unwrap_or_default();
    let request = match step.action {
        Action::Create => client.build_create(step.key, value),
        Action::Read => client.build_read(step.key),
        Action::Update => client.build_update(step.key, value),
        Action::Delete => client.build_delete(step.key),
    };

    let response = match transport.execute(request) {
        Ok(response) => response,
        Err(err) => {
            return StepReport {
                step,
                status: None,
                body: None,
                result: Err(err),
            }
        }
    };

    let status = response.status;
    let body = response.body.clone();
    StepReport {
        step,
        status: Some(status),
        body: Some(body),
        result: parse(client, step.action, response).map_err(CliError::from),
    }
}

fn parse(
    client: &MembershipClient,
    action: Action,
    response: HttpResponse,
) -> Result<Reply, membership_core::ApiError> {
    match action {
        Action::Create => client.parse_create(response),
        Action::Read => client.parse_read(response),
        Action::Update => client.parse_update(response),
        Action::Delete => client.parse_delete(response),
    }
}

pub fn run<T: Transport>(client: &MembershipClient, transport: &T) -> Vec<StepReport> {
    STEPS
        .iter()
        .map(|step| run_step(client, transport, *step))
        .collect()
}
