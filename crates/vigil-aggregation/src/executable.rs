//! Groups a hierarchy's declaration-record stream by kind and slot.

use tracing::debug;

use vigil_core::errors::MetadataResult;
use vigil_core::raw::{ConstrainedElement, TypeRef};
use vigil_core::traits::{ConstraintAdapter, MetaDataBuilder};

use crate::parameter::{ParameterMetaData, ParameterMetaDataBuilder};
use crate::return_value::{ReturnValueMetaData, ReturnValueMetaDataBuilder};

/// Aggregated constraint metadata for one logical method: its parameter
/// slots plus its return value.
#[derive(Debug, Clone)]
pub struct ExecutableMetaData {
    parameters: Vec<ParameterMetaData>,
    return_value: Option<ReturnValueMetaData>,
}

impl ExecutableMetaData {
    /// Parameter aggregates, ordered by slot index.
    pub fn parameters(&self) -> &[ParameterMetaData] {
        &self.parameters
    }

    /// The aggregate for one parameter slot, if any record mentioned it.
    pub fn parameter(&self, index: u16) -> Option<&ParameterMetaData> {
        self.parameters.iter().find(|p| p.index() == index)
    }

    pub fn return_value(&self) -> Option<&ReturnValueMetaData> {
        self.return_value.as_ref()
    }
}

/// Routes declaration records to per-slot builders, seeding a new builder
/// on first contact with a slot.
///
/// Records may arrive interleaved across slots, but within one slot the
/// hierarchy contract applies: the root (most-derived) type's
/// declarations first, supertypes after, so local parameter names win
/// name resolution. Delivering only part of the hierarchy is not
/// detected here; completeness is the discovery collaborator's job.
#[derive(Debug)]
pub struct ExecutableMetaDataBuilder {
    root_type: TypeRef,
    parameters: Vec<ParameterMetaDataBuilder>,
    return_value: Option<ReturnValueMetaDataBuilder>,
}

impl ExecutableMetaDataBuilder {
    pub fn new(root_type: TypeRef) -> Self {
        Self {
            root_type,
            parameters: Vec::new(),
            return_value: None,
        }
    }

    /// Route one record to the builder for its slot.
    pub fn add(&mut self, element: ConstrainedElement) -> MetadataResult<()> {
        match element {
            ConstrainedElement::Parameter(parameter) => {
                let slot = self
                    .parameters
                    .iter()
                    .position(|b| b.index() == parameter.index);
                match slot {
                    Some(i) => self.parameters[i].add(ConstrainedElement::Parameter(parameter)),
                    None => {
                        debug!(index = parameter.index, "seeding parameter slot aggregator");
                        self.parameters.push(ParameterMetaDataBuilder::new(
                            self.root_type.clone(),
                            parameter,
                        ));
                        Ok(())
                    }
                }
            }
            ConstrainedElement::ReturnValue(return_value) => match self.return_value.as_mut() {
                Some(builder) => builder.add(ConstrainedElement::ReturnValue(return_value)),
                None => {
                    debug!("seeding return value aggregator");
                    self.return_value = Some(ReturnValueMetaDataBuilder::new(
                        self.root_type.clone(),
                        return_value,
                    ));
                    Ok(())
                }
            },
        }
    }

    /// Freeze every slot, running constraint adaptation once per builder.
    pub fn build(self, adapter: &dyn ConstraintAdapter) -> ExecutableMetaData {
        debug!(
            root_type = %self.root_type,
            parameter_slots = self.parameters.len(),
            has_return_value = self.return_value.is_some(),
            "freezing executable metadata"
        );
        let mut parameters: Vec<ParameterMetaData> = self
            .parameters
            .into_iter()
            .map(|b| b.build(adapter))
            .collect();
        parameters.sort_by_key(ParameterMetaData::index);

        ExecutableMetaData {
            parameters,
            return_value: self.return_value.map(|b| b.build(adapter)),
        }
    }
}
