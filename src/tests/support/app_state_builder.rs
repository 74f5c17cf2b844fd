use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    fetch_profile::FetchProfileUseCase, list_login_logs::ListLoginLogsUseCase,
    login_user::LoginUserUseCase, register_user::RegisterUserUseCase,
    select_stream::SelectStreamUseCase, update_details::UpdateDetailsUseCase,
    update_password::UpdatePasswordUseCase,
};
use crate::career::application::career_use_cases::CareerUseCases;
use crate::career::application::ports::incoming::use_cases::{
    GetRoleDetailsUseCase, GetSubStreamCoursesUseCase,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::ports::incoming::use_cases::{
    BrowseCatalogUseCase, CourseAdminUseCase, JobAdminUseCase, RoleAdminUseCase,
    StreamAdminUseCase, SubDomainAdminUseCase,
};
use crate::feedback::application::feedback_use_cases::FeedbackUseCases;
use crate::feedback::application::ports::incoming::use_cases::{
    ListFeedbackUseCase, SubmitFeedbackUseCase,
};
use crate::progress::application::ports::incoming::use_cases::{
    TrackCourseProgressUseCase, UpdateSkillProgressUseCase,
};
use crate::progress::application::progress_use_cases::ProgressUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` where every use case is a stub until replaced.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    catalog: CatalogUseCases,
    career: CareerUseCases,
    progress: ProgressUseCases,
    feedback: FeedbackUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                fetch_profile: Arc::new(StubFetchProfileUseCase),
                update_details: Arc::new(StubUpdateDetailsUseCase),
                update_password: Arc::new(StubUpdatePasswordUseCase),
                select_stream: Arc::new(StubSelectStreamUseCase),
                list_login_logs: Arc::new(StubListLoginLogsUseCase),
            },
            catalog: CatalogUseCases {
                browse: Arc::new(StubBrowseCatalogUseCase),
                streams: Arc::new(StubStreamAdminUseCase),
                sub_domains: Arc::new(StubSubDomainAdminUseCase),
                roles: Arc::new(StubRoleAdminUseCase),
                courses: Arc::new(StubCourseAdminUseCase),
                jobs: Arc::new(StubJobAdminUseCase),
            },
            career: CareerUseCases {
                role_details: Arc::new(StubGetRoleDetailsUseCase),
                sub_stream_courses: Arc::new(StubGetSubStreamCoursesUseCase),
            },
            progress: ProgressUseCases {
                skill_progress: Arc::new(StubUpdateSkillProgressUseCase),
                course_progress: Arc::new(StubTrackCourseProgressUseCase),
            },
            feedback: FeedbackUseCases {
                submit: Arc::new(StubSubmitFeedbackUseCase),
                list: Arc::new(StubListFeedbackUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // auth

    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl FetchProfileUseCase + 'static) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_details(mut self, uc: impl UpdateDetailsUseCase + 'static) -> Self {
        self.auth.update_details = Arc::new(uc);
        self
    }

    pub fn with_update_password(mut self, uc: impl UpdatePasswordUseCase + 'static) -> Self {
        self.auth.update_password = Arc::new(uc);
        self
    }

    pub fn with_select_stream(mut self, uc: impl SelectStreamUseCase + 'static) -> Self {
        self.auth.select_stream = Arc::new(uc);
        self
    }

    pub fn with_list_login_logs(mut self, uc: impl ListLoginLogsUseCase + 'static) -> Self {
        self.auth.list_login_logs = Arc::new(uc);
        self
    }

    // catalog

    pub fn with_browse_catalog(mut self, uc: impl BrowseCatalogUseCase + 'static) -> Self {
        self.catalog.browse = Arc::new(uc);
        self
    }

    pub fn with_stream_admin(mut self, uc: impl StreamAdminUseCase + 'static) -> Self {
        self.catalog.streams = Arc::new(uc);
        self
    }

    pub fn with_sub_domain_admin(mut self, uc: impl SubDomainAdminUseCase + 'static) -> Self {
        self.catalog.sub_domains = Arc::new(uc);
        self
    }

    pub fn with_role_admin(mut self, uc: impl RoleAdminUseCase + 'static) -> Self {
        self.catalog.roles = Arc::new(uc);
        self
    }

    pub fn with_course_admin(mut self, uc: impl CourseAdminUseCase + 'static) -> Self {
        self.catalog.courses = Arc::new(uc);
        self
    }

    pub fn with_job_admin(mut self, uc: impl JobAdminUseCase + 'static) -> Self {
        self.catalog.jobs = Arc::new(uc);
        self
    }

    // career

    pub fn with_role_details(mut self, uc: impl GetRoleDetailsUseCase + 'static) -> Self {
        self.career.role_details = Arc::new(uc);
        self
    }

    pub fn with_sub_stream_courses(
        mut self,
        uc: impl GetSubStreamCoursesUseCase + 'static,
    ) -> Self {
        self.career.sub_stream_courses = Arc::new(uc);
        self
    }

    // progress

    pub fn with_update_skill_progress(
        mut self,
        uc: impl UpdateSkillProgressUseCase + 'static,
    ) -> Self {
        self.progress.skill_progress = Arc::new(uc);
        self
    }

    pub fn with_track_course_progress(
        mut self,
        uc: impl TrackCourseProgressUseCase + 'static,
    ) -> Self {
        self.progress.course_progress = Arc::new(uc);
        self
    }

    // feedback

    pub fn with_submit_feedback(mut self, uc: impl SubmitFeedbackUseCase + 'static) -> Self {
        self.feedback.submit = Arc::new(uc);
        self
    }

    pub fn with_list_feedback(mut self, uc: impl ListFeedbackUseCase + 'static) -> Self {
        self.feedback.list = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            catalog: self.catalog,
            career: self.career,
            progress: self.progress,
            feedback: self.feedback,
        })
    }
}
