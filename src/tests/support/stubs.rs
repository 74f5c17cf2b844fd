//! Placeholders for every use case in `AppState`. Handler tests replace the
//! one they exercise; touching any other one is a test bug.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthSession, UserId};
use crate::auth::application::ports::outgoing::UserProfileView;
use crate::auth::application::use_cases::{
    fetch_profile::{FetchProfileError, FetchProfileUseCase},
    list_login_logs::{ListLoginLogsError, ListLoginLogsQuery, ListLoginLogsUseCase, LoginLogReport},
    login_user::{LoginCommand, LoginError, LoginUserUseCase},
    register_user::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
    select_stream::{SelectStreamError, SelectStreamUseCase},
    update_details::{UpdateDetailsCommand, UpdateDetailsError, UpdateDetailsUseCase},
    update_password::{UpdatePasswordCommand, UpdatePasswordError, UpdatePasswordUseCase},
};
use crate::career::application::domain::{RoleDetails, SubStreamCourses};
use crate::career::application::ports::incoming::use_cases::{
    GetRoleDetailsError, GetRoleDetailsUseCase, GetSubStreamCoursesError,
    GetSubStreamCoursesQuery, GetSubStreamCoursesUseCase,
};
use crate::catalog::application::domain::{
    Course, Job, Role, RoleAdminView, RoleView, Stream, StreamWithSubDomains, SubDomain,
    SubDomainView,
};
use crate::catalog::application::ports::incoming::use_cases::{
    BrowseCatalogError, BrowseCatalogUseCase, CatalogAdminError, CertificationsCommand,
    CourseAdminUseCase, CourseCommand, JobAdminUseCase, JobCommand, RoleAdminUseCase, RoleCommand,
    StreamAdminUseCase, StreamCommand, SubDomainAdminUseCase, SubDomainCommand,
};
use crate::feedback::application::domain::{Feedback, FeedbackWithAuthor};
use crate::feedback::application::ports::incoming::use_cases::{
    ListFeedbackError, ListFeedbackUseCase, SubmitFeedbackCommand, SubmitFeedbackError,
    SubmitFeedbackUseCase,
};
use crate::progress::application::domain::SkillProgress;
use crate::progress::application::ports::incoming::use_cases::{
    TrackCourseProgressCommand, TrackCourseProgressError, TrackCourseProgressUseCase,
    UpdateSkillProgressCommand, UpdateSkillProgressError, UpdateSkillProgressUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────
//

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfileView, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateDetailsUseCase;

#[async_trait]
impl UpdateDetailsUseCase for StubUpdateDetailsUseCase {
    async fn execute(
        &self,
        _command: UpdateDetailsCommand,
    ) -> Result<UserProfileView, UpdateDetailsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdatePasswordUseCase;

#[async_trait]
impl UpdatePasswordUseCase for StubUpdatePasswordUseCase {
    async fn execute(
        &self,
        _command: UpdatePasswordCommand,
    ) -> Result<AuthSession, UpdatePasswordError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubSelectStreamUseCase;

#[async_trait]
impl SelectStreamUseCase for StubSelectStreamUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _stream_id: Option<Uuid>,
    ) -> Result<UserProfileView, SelectStreamError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListLoginLogsUseCase;

#[async_trait]
impl ListLoginLogsUseCase for StubListLoginLogsUseCase {
    async fn execute(
        &self,
        _query: ListLoginLogsQuery,
    ) -> Result<LoginLogReport, ListLoginLogsError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Catalog
// ──────────────────────────────────────────────────────────
//

pub struct StubBrowseCatalogUseCase;

#[async_trait]
impl BrowseCatalogUseCase for StubBrowseCatalogUseCase {
    async fn list_streams(&self) -> Result<Vec<StreamWithSubDomains>, BrowseCatalogError> {
        unimplemented!("Not used in this test")
    }

    async fn career_path(
        &self,
        _stream_id: Uuid,
    ) -> Result<StreamWithSubDomains, BrowseCatalogError> {
        unimplemented!("Not used in this test")
    }

    async fn roles_by_sub_domain(
        &self,
        _sub_domain_id: Uuid,
    ) -> Result<Vec<RoleView>, BrowseCatalogError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubStreamAdminUseCase;

#[async_trait]
impl StreamAdminUseCase for StubStreamAdminUseCase {
    async fn list(&self) -> Result<Vec<Stream>, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn create(&self, _command: StreamCommand) -> Result<Stream, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn update(&self, _id: Uuid, _command: StreamCommand) -> Result<Stream, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubSubDomainAdminUseCase;

#[async_trait]
impl SubDomainAdminUseCase for StubSubDomainAdminUseCase {
    async fn list(&self) -> Result<Vec<SubDomainView>, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn create(&self, _command: SubDomainCommand) -> Result<SubDomain, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn update(
        &self,
        _id: Uuid,
        _command: SubDomainCommand,
    ) -> Result<SubDomain, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn replace_certifications(
        &self,
        _id: Uuid,
        _command: CertificationsCommand,
    ) -> Result<SubDomain, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRoleAdminUseCase;

#[async_trait]
impl RoleAdminUseCase for StubRoleAdminUseCase {
    async fn list(&self) -> Result<Vec<RoleAdminView>, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn create(&self, _command: RoleCommand) -> Result<Role, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn update(&self, _id: Uuid, _command: RoleCommand) -> Result<Role, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCourseAdminUseCase;

#[async_trait]
impl CourseAdminUseCase for StubCourseAdminUseCase {
    async fn list(&self) -> Result<Vec<Course>, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn create(&self, _command: CourseCommand) -> Result<Course, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn update(&self, _id: Uuid, _command: CourseCommand) -> Result<Course, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubJobAdminUseCase;

#[async_trait]
impl JobAdminUseCase for StubJobAdminUseCase {
    async fn list(&self) -> Result<Vec<Job>, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn create(&self, _command: JobCommand) -> Result<Job, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn update(&self, _id: Uuid, _command: JobCommand) -> Result<Job, CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
    async fn delete(&self, _id: Uuid) -> Result<(), CatalogAdminError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Career, progress, feedback
// ──────────────────────────────────────────────────────────
//

pub struct StubGetRoleDetailsUseCase;

#[async_trait]
impl GetRoleDetailsUseCase for StubGetRoleDetailsUseCase {
    async fn execute(
        &self,
        _role_id: Uuid,
        _user_id: UserId,
    ) -> Result<RoleDetails, GetRoleDetailsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetSubStreamCoursesUseCase;

#[async_trait]
impl GetSubStreamCoursesUseCase for StubGetSubStreamCoursesUseCase {
    async fn execute(
        &self,
        _query: GetSubStreamCoursesQuery,
        _user_id: UserId,
    ) -> Result<SubStreamCourses, GetSubStreamCoursesError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateSkillProgressUseCase;

#[async_trait]
impl UpdateSkillProgressUseCase for StubUpdateSkillProgressUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: UpdateSkillProgressCommand,
    ) -> Result<Vec<SkillProgress>, UpdateSkillProgressError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubTrackCourseProgressUseCase;

#[async_trait]
impl TrackCourseProgressUseCase for StubTrackCourseProgressUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: TrackCourseProgressCommand,
    ) -> Result<UserProfileView, TrackCourseProgressError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubSubmitFeedbackUseCase;

#[async_trait]
impl SubmitFeedbackUseCase for StubSubmitFeedbackUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: SubmitFeedbackCommand,
    ) -> Result<Feedback, SubmitFeedbackError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListFeedbackUseCase;

#[async_trait]
impl ListFeedbackUseCase for StubListFeedbackUseCase {
    async fn execute(&self) -> Result<Vec<FeedbackWithAuthor>, ListFeedbackError> {
        unimplemented!("Not used in this test")
    }
}
