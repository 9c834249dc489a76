use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::confirm_email::{
    ConfirmEmailError, ConfirmEmailOutcome, IConfirmEmailUseCase,
};
use crate::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase, UserProfile,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenResponse,
};
use crate::auth::application::use_cases::request_email::{
    IRequestEmailUseCase, RequestEmailError, RequestEmailOutcome,
};
use crate::auth::application::use_cases::signup_user::{ISignupUseCase, SignupError, SignupRequest};
use crate::auth::application::use_cases::update_avatar::{
    IUpdateAvatarUseCase, UpdateAvatarError, UpdateAvatarResponse,
};
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::SearchFilter;
use crate::contact::application::use_cases::create_contact::{
    CreateContactError, CreateContactRequest, ICreateContactUseCase,
};
use crate::contact::application::use_cases::delete_contact::{
    DeleteContactError, IDeleteContactUseCase,
};
use crate::contact::application::use_cases::get_contact::{GetContactError, IGetContactUseCase};
use crate::contact::application::use_cases::list_contacts::{
    IListContactsUseCase, ListContactsError,
};
use crate::contact::application::use_cases::search_contacts::{
    ISearchContactsUseCase, SearchContactsError,
};
use crate::contact::application::use_cases::upcoming_birthdays::{
    IUpcomingBirthdaysUseCase, UpcomingBirthdaysError,
};
use crate::contact::application::use_cases::update_contact::{
    IUpdateContactUseCase, UpdateContactError, UpdateContactRequest,
};
use crate::shared::limiter::{RateDecision, RateLimitError, RateLimiter};

#[derive(Default, Clone)]
pub struct StubSignupUseCase;

#[async_trait]
impl ISignupUseCase for StubSignupUseCase {
    async fn execute(&self, _request: SignupRequest) -> Result<User, SignupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _refresh_token: &str,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubConfirmEmailUseCase;

#[async_trait]
impl IConfirmEmailUseCase for StubConfirmEmailUseCase {
    async fn execute(&self, _token: &str) -> Result<ConfirmEmailOutcome, ConfirmEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRequestEmailUseCase;

#[async_trait]
impl IRequestEmailUseCase for StubRequestEmailUseCase {
    async fn execute(&self, _email: &str) -> Result<RequestEmailOutcome, RequestEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateAvatarUseCase;

#[async_trait]
impl IUpdateAvatarUseCase for StubUpdateAvatarUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _content_type: &str,
    ) -> Result<UpdateAvatarResponse, UpdateAvatarError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListContactsUseCase;

#[async_trait]
impl IListContactsUseCase for StubListContactsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _skip: u64,
        _limit: u64,
    ) -> Result<Vec<Contact>, ListContactsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetContactUseCase;

#[async_trait]
impl IGetContactUseCase for StubGetContactUseCase {
    async fn execute(&self, _user_id: Uuid, _contact_id: Uuid) -> Result<Contact, GetContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateContactUseCase;

#[async_trait]
impl ICreateContactUseCase for StubCreateContactUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: CreateContactRequest,
    ) -> Result<Contact, CreateContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateContactUseCase;

#[async_trait]
impl IUpdateContactUseCase for StubUpdateContactUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _contact_id: Uuid,
        _request: UpdateContactRequest,
    ) -> Result<Contact, UpdateContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteContactUseCase;

#[async_trait]
impl IDeleteContactUseCase for StubDeleteContactUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _contact_id: Uuid,
    ) -> Result<Contact, DeleteContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSearchContactsUseCase;

#[async_trait]
impl ISearchContactsUseCase for StubSearchContactsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _filter: SearchFilter,
    ) -> Result<Vec<Contact>, SearchContactsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpcomingBirthdaysUseCase;

#[async_trait]
impl IUpcomingBirthdaysUseCase for StubUpcomingBirthdaysUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _today: NaiveDate,
    ) -> Result<Vec<Contact>, UpcomingBirthdaysError> {
        unimplemented!("Not used in this test")
    }
}

struct AllowAllLimiter;

#[async_trait]
impl RateLimiter for AllowAllLimiter {
    async fn hit(&self, _key: &str) -> Result<RateDecision, RateLimitError> {
        Ok(RateDecision::Allowed { remaining: 9 })
    }
}

struct ExceededLimiter {
    retry_after_secs: u64,
}

#[async_trait]
impl RateLimiter for ExceededLimiter {
    async fn hit(&self, _key: &str) -> Result<RateDecision, RateLimitError> {
        Ok(RateDecision::Exceeded {
            retry_after_secs: self.retry_after_secs,
        })
    }
}

struct FailingLimiter;

#[async_trait]
impl RateLimiter for FailingLimiter {
    async fn hit(&self, _key: &str) -> Result<RateDecision, RateLimitError> {
        Err(RateLimitError::Backend("redis unavailable".to_string()))
    }
}

pub fn allow_all_limiter() -> web::Data<Arc<dyn RateLimiter>> {
    web::Data::new(Arc::new(AllowAllLimiter) as Arc<dyn RateLimiter>)
}

pub fn exceeded_limiter(retry_after_secs: u64) -> web::Data<Arc<dyn RateLimiter>> {
    web::Data::new(Arc::new(ExceededLimiter { retry_after_secs }) as Arc<dyn RateLimiter>)
}

pub fn failing_limiter() -> web::Data<Arc<dyn RateLimiter>> {
    web::Data::new(Arc::new(FailingLimiter) as Arc<dyn RateLimiter>)
}
