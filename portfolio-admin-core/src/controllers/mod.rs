//! 页面控制器
//!
//! UI-agnostic page state. Each controller exposes `begin_*` methods that
//! return a [`RequestToken`] and `finish_*` methods that apply a result only
//! when its token is still current, plus async conveniences that drive a
//! whole request in place.

mod form;
mod group_options;
mod list;
mod load_state;
mod request;
mod url_list;

pub use form::{
    AfterSuccess, FormController, FormEntity, FormMode, FormStatus, Submission, SubmitOutcome,
    URL_FORM_REDIRECT_DELAY, UrlForm, UrlGrpForm,
};
pub use group_options::GroupOptions;
pub use list::{DeleteOutcome, ListController, Selection, fetch_list};
pub use load_state::LoadState;
pub use request::{RequestGeneration, RequestToken};
pub use url_list::{NO_GROUP_FILTER, UrlListController, filter_by_group, join_urls_with_groups};
