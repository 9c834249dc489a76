use crate::auth::application::use_cases::{
    confirm_email::IConfirmEmailUseCase, fetch_profile::IFetchProfileUseCase,
    login_user::ILoginUserUseCase, refresh_token::IRefreshTokenUseCase,
    request_email::IRequestEmailUseCase, signup_user::ISignupUseCase,
    update_avatar::IUpdateAvatarUseCase,
};
use crate::contact::application::use_cases::{
    create_contact::ICreateContactUseCase, delete_contact::IDeleteContactUseCase,
    get_contact::IGetContactUseCase, list_contacts::IListContactsUseCase,
    search_contacts::ISearchContactsUseCase, upcoming_birthdays::IUpcomingBirthdaysUseCase,
    update_contact::IUpdateContactUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every slot starts as a panicking stub; tests swap in the one use case
/// they exercise.
pub struct TestAppStateBuilder {
    signup: Arc<dyn ISignupUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    confirm_email: Arc<dyn IConfirmEmailUseCase + Send + Sync>,
    request_email: Arc<dyn IRequestEmailUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    update_avatar: Arc<dyn IUpdateAvatarUseCase + Send + Sync>,
    list_contacts: Arc<dyn IListContactsUseCase + Send + Sync>,
    get_contact: Arc<dyn IGetContactUseCase + Send + Sync>,
    create_contact: Arc<dyn ICreateContactUseCase + Send + Sync>,
    update_contact: Arc<dyn IUpdateContactUseCase + Send + Sync>,
    delete_contact: Arc<dyn IDeleteContactUseCase + Send + Sync>,
    search_contacts: Arc<dyn ISearchContactsUseCase + Send + Sync>,
    upcoming_birthdays: Arc<dyn IUpcomingBirthdaysUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            signup: Arc::new(StubSignupUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            confirm_email: Arc::new(StubConfirmEmailUseCase),
            request_email: Arc::new(StubRequestEmailUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_avatar: Arc::new(StubUpdateAvatarUseCase),
            list_contacts: Arc::new(StubListContactsUseCase),
            get_contact: Arc::new(StubGetContactUseCase),
            create_contact: Arc::new(StubCreateContactUseCase),
            update_contact: Arc::new(StubUpdateContactUseCase),
            delete_contact: Arc::new(StubDeleteContactUseCase),
            search_contacts: Arc::new(StubSearchContactsUseCase),
            upcoming_birthdays: Arc::new(StubUpcomingBirthdaysUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_signup(mut self, uc: impl ISignupUseCase + Send + Sync + 'static) -> Self {
        self.signup = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_confirm_email(
        mut self,
        uc: impl IConfirmEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.confirm_email = Arc::new(uc);
        self
    }

    pub fn with_request_email(
        mut self,
        uc: impl IRequestEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.request_email = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_avatar(
        mut self,
        uc: impl IUpdateAvatarUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_avatar = Arc::new(uc);
        self
    }

    pub fn with_list_contacts(
        mut self,
        uc: impl IListContactsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_contacts = Arc::new(uc);
        self
    }

    pub fn with_get_contact(mut self, uc: impl IGetContactUseCase + Send + Sync + 'static) -> Self {
        self.get_contact = Arc::new(uc);
        self
    }

    pub fn with_create_contact(
        mut self,
        uc: impl ICreateContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_contact = Arc::new(uc);
        self
    }

    pub fn with_update_contact(
        mut self,
        uc: impl IUpdateContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_contact = Arc::new(uc);
        self
    }

    pub fn with_delete_contact(
        mut self,
        uc: impl IDeleteContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_contact = Arc::new(uc);
        self
    }

    pub fn with_search_contacts(
        mut self,
        uc: impl ISearchContactsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_contacts = Arc::new(uc);
        self
    }

    pub fn with_upcoming_birthdays(
        mut self,
        uc: impl IUpcomingBirthdaysUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upcoming_birthdays = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            signup_use_case: self.signup,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            confirm_email_use_case: self.confirm_email,
            request_email_use_case: self.request_email,
            fetch_profile_use_case: self.fetch_profile,
            update_avatar_use_case: self.update_avatar,
            list_contacts_use_case: self.list_contacts,
            get_contact_use_case: self.get_contact,
            create_contact_use_case: self.create_contact,
            update_contact_use_case: self.update_contact,
            delete_contact_use_case: self.delete_contact,
            search_contacts_use_case: self.search_contacts,
            upcoming_birthdays_use_case: self.upcoming_birthdays,
        })
    }
}
