//! Shared test doubles for controller tests

use async_trait::async_trait;
use roster_core::{ApiClient, ApiResult, Credentials, LoginResponse, StaffMember, StaffPage};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// Scripted API: replies are queued up front and handed out in order.
///
/// When built with [`FakeApi::gated`], every call waits for a permit
/// released through [`FakeApi::release`], which lets a test observe the
/// controller while a request is in flight.
#[derive(Default)]
pub struct FakeApi {
    logins: Mutex<VecDeque<ApiResult<Option<LoginResponse>>>>,
    pages: Mutex<VecDeque<ApiResult<Option<StaffPage>>>>,
    login_calls: Mutex<Vec<Credentials>>,
    page_calls: Mutex<Vec<u32>>,
    gate: Option<Semaphore>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn reply_login(self, reply: ApiResult<Option<LoginResponse>>) -> Self {
        self.logins.lock().unwrap().push_back(reply);
        self
    }

    pub fn reply_page(self, reply: ApiResult<Option<StaffPage>>) -> Self {
        self.pages.lock().unwrap().push_back(reply);
        self
    }

    pub fn login_calls(&self) -> Vec<Credentials> {
        self.login_calls.lock().unwrap().clone()
    }

    pub fn page_calls(&self) -> Vec<u32> {
        self.page_calls.lock().unwrap().clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }
}

#[async_trait]
impl ApiClient for FakeApi {
    async fn login(&self, credentials: Credentials) -> ApiResult<Option<LoginResponse>> {
        self.login_calls.lock().unwrap().push(credentials);
        self.wait_for_gate().await;
        self.logins
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected login call")
    }

    async fn fetch_page(&self, page: u32) -> ApiResult<Option<StaffPage>> {
        self.page_calls.lock().unwrap().push(page);
        self.wait_for_gate().await;
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected fetch_page call")
    }
}

pub fn member(id: i64) -> StaffMember {
    StaffMember {
        id: Some(id),
        email: Some(format!("staff{id}@reqres.in")),
        first_name: Some(format!("First{id}")),
        last_name: Some(format!("Last{id}")),
        avatar: Some(format!("https://reqres.in/img/faces/{id}-image.jpg")),
    }
}

pub fn members(ids: std::ops::RangeInclusive<i64>) -> Vec<StaffMember> {
    ids.map(member).collect()
}
