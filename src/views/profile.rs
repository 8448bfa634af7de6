use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::CookieJar;
use chrono::Local;

use crate::auth::extractor::AuthUser;
use crate::checks;
use crate::db;
use crate::error::AppError;
use crate::forms::{ProfileEditErrors, ProfileEditForm, WgForm};
use crate::models::LeaseRecord;
use crate::notices::{flash, take_flash, Notice};
use crate::state::SharedState;
use crate::wg::{self, WgSelection};

#[derive(Template)]
#[template(path = "account/profile.html")]
struct ProfileTemplate {
    notices: Vec<Notice>,
    share_received: bool,
    valid_lease: bool,
    leases: Vec<LeaseRow>,
    groups: Vec<String>,
    wg: WgSelection,
}

struct LeaseRow {
    label: String,
    start_date: String,
    end_date: String,
    active: bool,
    has_inventory: bool,
}

impl LeaseRow {
    fn from_record(lease: &LeaseRecord, today: chrono::NaiveDate) -> Self {
        LeaseRow {
            label: lease.label.clone(),
            start_date: lease.start_date.format("%Y-%m-%d").to_string(),
            end_date: lease.end_date.format("%Y-%m-%d").to_string(),
            active: lease.is_active(today),
            has_inventory: lease.has_inventory,
        }
    }
}

#[derive(Template)]
#[template(path = "account/edit_profile.html")]
struct EditProfileTemplate {
    form: ProfileEditForm,
    errors: ProfileEditErrors,
}

pub async fn show(
    auth: AuthUser,
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (user, profile) = auth.load(&state.pool).await?;
    let today = Local::now().date_naive();

    let (jar, mut notices) = take_flash(jar);
    let leases = db::leases::list_by_user(&state.pool, auth.user_id).await?;
    let valid_lease = checks::evaluate_leases(&leases, today, &mut notices);
    checks::check_profile(&user, &profile, &mut notices);

    let groups = db::groups::list_working_groups(&state.pool)
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();
    let memberships = db::groups::memberships(&state.pool, auth.user_id).await?;

    let template = ProfileTemplate {
        notices,
        share_received: profile.share_received,
        valid_lease,
        leases: leases.iter().map(|l| LeaseRow::from_record(l, today)).collect(),
        groups,
        wg: WgSelection::from_groups(&memberships),
    };
    Ok((jar, Html(template.render().unwrap_or_default())))
}

pub async fn update_wgs(
    auth: AuthUser,
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<WgForm>,
) -> Result<impl IntoResponse, AppError> {
    let memberships = db::groups::memberships(&state.pool, auth.user_id).await?;
    let current = WgSelection::from_groups(&memberships);

    wg::reconcile(&state.pool, auth.user_id, current, form.selection()).await?;

    let jar = flash(jar, Notice::success("WG membership updated successfully."));
    Ok((jar, Redirect::to("/profile")))
}

pub async fn edit_page(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let (user, profile) = auth.load(&state.pool).await?;

    let template = EditProfileTemplate {
        form: ProfileEditForm {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone_number: profile.phone_number,
            perm_address: profile.perm_address,
        },
        errors: ProfileEditErrors::default(),
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn edit_submit(
    auth: AuthUser,
    State(state): State<SharedState>,
    Form(form): Form<ProfileEditForm>,
) -> Result<Response, AppError> {
    let (user, _) = auth.load(&state.pool).await?;

    let valid = match form.validate() {
        Ok(valid) => valid,
        Err((form, errors)) => {
            let template = EditProfileTemplate { form, errors };
            return Ok(Html(template.render().unwrap_or_default()).into_response());
        }
    };

    // The email column is unique; surface a takeover attempt as a field
    // error instead of a 500.
    if valid.email != user.email {
        if let Some(other) = db::users::find_by_email(&state.pool, &valid.email).await? {
            if other.id != user.id {
                let errors = ProfileEditErrors {
                    email: Some("This email address is already in use.".to_string()),
                    ..Default::default()
                };
                let template = EditProfileTemplate { form: valid, errors };
                return Ok(Html(template.render().unwrap_or_default()).into_response());
            }
        }
    }

    let mut tx = state.pool.begin().await?;
    db::users::update_identity(
        &mut *tx,
        user.id,
        &valid.first_name,
        &valid.last_name,
        &valid.email,
    )
    .await?;
    db::profiles::update_contact(&mut *tx, user.id, &valid.phone_number, &valid.perm_address)
        .await?;
    tx.commit().await?;

    Ok(Redirect::to("/profile").into_response())
}
