use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use minijinja::context;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::build_rewrite_prompt;
use crate::models::{find_record, Category};
use crate::pages::{DETAILS_TEMPLATE, HOME_TEMPLATE};
use crate::state::AppState;
use crate::store::{list_personas, load_persona, load_records, PersonaName};

pub const DEFAULT_PERSON: &str = "person1";

#[derive(Debug, Default, Deserialize)]
pub struct ListingForm {
    pub recordtype: Option<String>,
    pub person: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub id: i64,
    pub recordtype: Option<String>,
    pub person: Option<String>,
}

/// Resolves the category and persona a request asks for. Missing or blank
/// values fall back to `property` / `person1`.
fn resolve_selection(
    recordtype: Option<&str>,
    person: Option<&str>,
) -> Result<(Category, PersonaName), AppError> {
    let category = match recordtype.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<Category>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
        None => Category::default(),
    };
    let person = PersonaName::parse(
        person
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PERSON),
    )?;
    Ok((category, person))
}

/// GET /
pub async fn handle_listing(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_listing(&state, ListingForm::default()).await
}

/// POST /
/// Re-renders the listing after the category or persona selector changes.
pub async fn handle_listing_submit(
    State(state): State<AppState>,
    Form(form): Form<ListingForm>,
) -> Result<Html<String>, AppError> {
    render_listing(&state, form).await
}

async fn render_listing(state: &AppState, form: ListingForm) -> Result<Html<String>, AppError> {
    let (category, person) = resolve_selection(form.recordtype.as_deref(), form.person.as_deref())?;

    let records = load_records(&state.config.data_dir, category).await?;
    let personas = list_personas(&state.config.personas_dir).await?;

    let categories: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let html = state.templates.get_template(HOME_TEMPLATE)?.render(context! {
        record_type => category.as_str(),
        records => records,
        person => person.as_str(),
        categories => categories,
        personas => personas,
    })?;

    Ok(Html(html))
}

/// GET /details?id=&recordtype=&person=
///
/// Rewrites one record's description for the chosen persona and renders it.
pub async fn handle_details(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, AppError> {
    let (category, person) = resolve_selection(query.recordtype.as_deref(), query.person.as_deref())?;
    let instruction = state.instructions.for_category(category);

    let records = load_records(&state.config.data_dir, category).await?;
    let mut record = find_record(&records, query.id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No {category} record with id {}", query.id)))?;

    let persona = load_persona(&state.config.personas_dir, &person).await?;

    let prompt = build_rewrite_prompt(instruction, &persona.preferences, &record.description);
    info!(
        "Rewriting {} record {} for persona {}",
        category, record.id, person
    );
    record.description = state.generator.generate(&prompt).await?;

    let html = state.templates.get_template(DETAILS_TEMPLATE)?.render(context! {
        record => record,
        record_type => category.as_str(),
        person => person.as_str(),
        persona_name => persona.name,
    })?;

    Ok(Html(html))
}
