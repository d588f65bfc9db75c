use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{IdError, LinkedServiceId, ParseResult, ResourceId, Segment};

static FACTORY_SEGMENTS: &[Segment] = &[
    Segment::fixed("staticSubscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::fixed("staticResourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
    Segment::fixed("staticProviders", "providers"),
    Segment::provider("staticMicrosoftDataFactory", "Microsoft.DataFactory"),
    Segment::fixed("staticFactories", "factories"),
    Segment::user_specified("factoryName", "factoryName"),
];

/// Id of a Data Factory instance; the parent of its linked services.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FactoryId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub factory_name: String,
}

impl FactoryId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        factory_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            factory_name: factory_name.into(),
        }
    }

    /// Id of the linked service `name` inside this factory.
    pub fn linked_service(&self, name: impl Into<String>) -> LinkedServiceId {
        LinkedServiceId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.factory_name.clone(),
            name,
        )
    }
}

impl ResourceId for FactoryId {
    const KIND: &'static str = "Factory";

    fn segments() -> &'static [Segment] {
        FACTORY_SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, IdError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            factory_name: result.require("factoryName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.DataFactory/factories/{}",
            self.subscription_id, self.resource_group_name, self.factory_name
        )
    }
}

impl fmt::Display for FactoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Factory (Subscription: {:?}\nResource Group Name: {:?}\nFactory Name: {:?})",
            self.subscription_id, self.resource_group_name, self.factory_name
        )
    }
}

impl FromStr for FactoryId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FactoryId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_insensitively(&value)
    }
}

impl From<FactoryId> for String {
    fn from(id: FactoryId) -> Self {
        id.id()
    }
}
