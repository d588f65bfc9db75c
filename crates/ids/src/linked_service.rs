use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FactoryId, IdError, ParseResult, ResourceId, Segment};

static LINKED_SERVICE_SEGMENTS: &[Segment] = &[
    Segment::fixed("staticSubscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::fixed("staticResourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
    Segment::fixed("staticProviders", "providers"),
    Segment::provider("staticMicrosoftDataFactory", "Microsoft.DataFactory"),
    Segment::fixed("staticFactories", "factories"),
    Segment::user_specified("factoryName", "factoryName"),
    Segment::fixed("staticLinkedServices", "linkedServices"),
    Segment::user_specified("linkedServiceName", "linkedServiceName"),
];

/// Id of a single linked service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkedServiceId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub factory_name: String,
    pub linked_service_name: String,
}

impl LinkedServiceId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        factory_name: impl Into<String>,
        linked_service_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            factory_name: factory_name.into(),
            linked_service_name: linked_service_name.into(),
        }
    }

    /// The factory that owns this linked service.
    pub fn factory_id(&self) -> FactoryId {
        FactoryId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.factory_name.clone(),
        )
    }
}

impl ResourceId for LinkedServiceId {
    const KIND: &'static str = "Linked Service";

    fn segments() -> &'static [Segment] {
        LINKED_SERVICE_SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, IdError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            factory_name: result.require("factoryName")?,
            linked_service_name: result.require("linkedServiceName")?,
        })
    }

    fn id(&self) -> String {
        format!("{}/linkedServices/{}", self.factory_id().id(), self.linked_service_name)
    }
}

impl fmt::Display for LinkedServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Linked Service (Subscription: {:?}\nResource Group Name: {:?}\nFactory Name: {:?}\nLinked Service Name: {:?})",
            self.subscription_id, self.resource_group_name, self.factory_name, self.linked_service_name
        )
    }
}

impl FromStr for LinkedServiceId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LinkedServiceId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_insensitively(&value)
    }
}

impl From<LinkedServiceId> for String {
    fn from(id: LinkedServiceId) -> Self {
        id.id()
    }
}
