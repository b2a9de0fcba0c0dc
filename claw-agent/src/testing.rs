//! Test doubles shared by the service and scheduler tests

use async_trait::async_trait;
use claw_client::{ClientError, Result};
use claw_core::domain::application::{Application, ApplicationStatus};
use claw_core::domain::deliverable::Deliverable;
use claw_core::domain::gig::{Gig, GigStatus};
use claw_core::dto::application::{ApplicationList, ApplicationStats};
use claw_core::dto::auth::{RegisterAgent, RegisterResponse, RegisteredUser};
use claw_core::dto::gig::{ApplicationReceipt, ApplyResponse};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::repository::MarketplaceRepository;

/// A scripted answer from the fake marketplace
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// Non-success HTTP status
    Status(u16),
    /// Unreachable or undecodable
    Broken,
}

impl<T> Reply<T> {
    fn into_result(self) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Status(status) => Err(ClientError::api_error(status, "scripted failure")),
            Reply::Broken => Err(ClientError::ParseError("scripted transport failure".to_string())),
        }
    }
}

/// Queue of replies; the last one repeats once the others are used up
struct Script<T> {
    replies: Mutex<VecDeque<Reply<T>>>,
}

impl<T: Clone> Script<T> {
    fn new(reply: Reply<T>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([reply])),
        }
    }

    fn push(&self, reply: Reply<T>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    fn set(&self, reply: Reply<T>) {
        *self.replies.lock().unwrap() = VecDeque::from([reply]);
    }

    fn next(&self) -> Result<T> {
        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap()
        };
        reply.into_result()
    }
}

/// A request the fake marketplace received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Register(String),
    ListGigs(GigStatus),
    Apply(String),
    ListApplications,
    Submit(Deliverable),
}

/// In-process marketplace that records every call
pub struct MockMarketplace {
    register: Script<RegisterResponse>,
    gigs: Script<Vec<Gig>>,
    apply: Script<ApplyResponse>,
    applications: Script<ApplicationList>,
    submit: Script<()>,
    calls: Mutex<Vec<Call>>,
}

impl MockMarketplace {
    pub fn new() -> Self {
        Self {
            register: Script::new(Reply::Ok(RegisterResponse {
                api_key: "ck_live_0123456789abcdefghijklmn".to_string(),
                user: RegisteredUser {
                    id: "user-1".to_string(),
                    name: None,
                },
            })),
            gigs: Script::new(Reply::Ok(Vec::new())),
            apply: Script::new(Reply::Ok(ApplyResponse {
                application: ApplicationReceipt {
                    id: Some("app-1".to_string()),
                    gig_title: "Applied gig".to_string(),
                },
            })),
            applications: Script::new(Reply::Ok(ApplicationList::default())),
            submit: Script::new(Reply::Ok(())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_gigs(self, gigs: Vec<Gig>) -> Self {
        self.gigs.set(Reply::Ok(gigs));
        self
    }

    pub fn with_gigs_reply(self, reply: Reply<Vec<Gig>>) -> Self {
        self.gigs.set(reply);
        self
    }

    /// Queues another gig listing reply after the current ones
    pub fn then_gigs_reply(self, reply: Reply<Vec<Gig>>) -> Self {
        self.gigs.push(reply);
        self
    }

    pub fn with_register_reply(self, reply: Reply<RegisterResponse>) -> Self {
        self.register.set(reply);
        self
    }

    pub fn with_apply_reply(self, reply: Reply<ApplyResponse>) -> Self {
        self.apply.set(reply);
        self
    }

    pub fn with_applications(self, applications: Vec<Application>) -> Self {
        let stats = ApplicationStats {
            total: applications.len() as u64,
            accepted: applications.iter().filter(|a| a.is_accepted()).count() as u64,
            pending: applications
                .iter()
                .filter(|a| a.status == ApplicationStatus::Pending)
                .count() as u64,
        };
        self.applications.set(Reply::Ok(ApplicationList {
            applications,
            stats,
        }));
        self
    }

    pub fn with_applications_reply(self, reply: Reply<ApplicationList>) -> Self {
        self.applications.set(reply);
        self
    }

    pub fn with_submit_reply(self, reply: Reply<()>) -> Self {
        self.submit.set(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    pub fn submissions(&self) -> Vec<Deliverable> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                Call::Submit(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MarketplaceRepository for MockMarketplace {
    async fn register(&self, req: &RegisterAgent) -> Result<RegisterResponse> {
        self.record(Call::Register(req.name.clone()));
        self.register.next()
    }

    async fn list_gigs(&self, status: GigStatus) -> Result<Vec<Gig>> {
        self.record(Call::ListGigs(status));
        self.gigs.next()
    }

    async fn apply(&self, gig_id: &str, _proposal: Option<String>) -> Result<ApplyResponse> {
        self.record(Call::Apply(gig_id.to_string()));
        self.apply.next()
    }

    async fn list_applications(&self) -> Result<ApplicationList> {
        self.record(Call::ListApplications);
        self.applications.next()
    }

    async fn submit_deliverable(&self, deliverable: &Deliverable) -> Result<()> {
        self.record(Call::Submit(deliverable.clone()));
        self.submit.next()
    }
}

/// Builds a gig with the fields matching looks at
pub fn gig(id: &str, title: &str, category: &str) -> Gig {
    Gig {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

/// Builds an application whose embedded gig is `gig`
pub fn application(gig: Gig, status: ApplicationStatus) -> Application {
    Application {
        gig_id: gig.id.clone(),
        status,
        gig: Some(gig),
    }
}
