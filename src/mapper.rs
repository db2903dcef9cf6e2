//! Conversions between the provider's template shape and mirror records.
//!
//! Pure functions: nothing here touches the network or the store.

use serde_json::Map;

use crate::{
    error::MappingError,
    models::{
        record::TemplateRecord,
        template::{CreateTemplateResponse, TemplateDefinition, TemplateDto, TemplatesResponse},
    },
};

/// Stamps the submitted definition with the status the provider returned and
/// packs it into a mirror record.
pub fn to_record(
    definition: &TemplateDefinition,
    created: &CreateTemplateResponse,
) -> Result<TemplateRecord, MappingError> {
    let status = created.status.clone().ok_or(MappingError::MissingStatus)?;

    let template = TemplateDto {
        id: created.id.clone(),
        name: definition.name.clone(),
        parameter_format: definition.parameter_format.clone(),
        language: definition.language.clone(),
        status: Some(status.clone()),
        category: definition.category.clone(),
        components: definition.components.clone(),
        extra: Map::new(),
    };

    let structure = serde_json::to_value(&template)?;

    Ok(TemplateRecord::new(definition.name.clone(), status, structure))
}

/// Rebuilds a provider-compatible listing from mirror records. The record's
/// status column wins over whatever the stored structure says.
///
/// Callers treat an empty slice as "not found" before getting here.
pub fn to_response_projection(
    records: &[TemplateRecord],
) -> Result<TemplatesResponse, MappingError> {
    let data = records
        .iter()
        .map(record_to_dto)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TemplatesResponse {
        data,
        paging: None,
        extra: Map::new(),
    })
}

fn record_to_dto(record: &TemplateRecord) -> Result<TemplateDto, MappingError> {
    let mut template: TemplateDto = serde_json::from_value(record.structure.clone())?;
    template.name = record.name.clone();
    template.status = Some(record.status.clone());
    Ok(template)
}
