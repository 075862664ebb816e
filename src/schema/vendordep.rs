use once_cell::sync::Lazy;

use super::node::{Field, SchemaNode};

/// Shape of a vendor dependency descriptor
pub static VENDORDEP_SCHEMA: Lazy<SchemaNode> = Lazy::new(|| {
    SchemaNode::mapping([
        Field::required("fileName", SchemaNode::String),
        Field::required("name", SchemaNode::String),
        Field::required("version", SchemaNode::String),
        Field::required("frcYear", SchemaNode::String),
        Field::required("uuid", SchemaNode::String),
        Field::required("mavenUrls", SchemaNode::list_of(SchemaNode::String)),
        Field::required("jsonUrl", SchemaNode::String),
        Field::optional("requires", SchemaNode::list_of(requires_entry())),
        Field::optional("conflictsWith", SchemaNode::list_of(conflicts_entry())),
        Field::optional("javaDependencies", SchemaNode::list_of(java_dependency())),
        Field::optional("jniDependencies", SchemaNode::list_of(jni_dependency())),
        Field::optional("cppDependencies", SchemaNode::list_of(cpp_dependency())),
    ])
});

fn maven_coordinate() -> [Field; 3] {
    [
        Field::required("groupId", SchemaNode::String),
        Field::required("artifactId", SchemaNode::String),
        Field::required("version", SchemaNode::String),
    ]
}

fn java_dependency() -> SchemaNode {
    SchemaNode::mapping(maven_coordinate())
}

fn jni_dependency() -> SchemaNode {
    SchemaNode::mapping(maven_coordinate().into_iter().chain([
        Field::required("isJar", SchemaNode::Bool),
        Field::required("validPlatforms", SchemaNode::list_of(SchemaNode::String)),
        Field::required("skipInvalidPlatforms", SchemaNode::Bool),
    ]))
}

fn cpp_dependency() -> SchemaNode {
    SchemaNode::mapping(maven_coordinate().into_iter().chain([
        Field::required("libName", SchemaNode::String),
        Field::optional("configuration", SchemaNode::String),
        Field::required("headerClassifier", SchemaNode::String),
        Field::optional("sourcesClassifier", SchemaNode::String),
        Field::optional("binaryPlatforms", SchemaNode::list_of(SchemaNode::String)),
        Field::optional("skipInvalidPlatforms", SchemaNode::Bool),
        Field::optional("sharedLibrary", SchemaNode::Bool),
    ]))
}

fn requires_entry() -> SchemaNode {
    SchemaNode::mapping([
        Field::required("uuid", SchemaNode::String),
        Field::required("errorMessage", SchemaNode::String),
        Field::required("offlineFileName", SchemaNode::String),
        Field::optional("onlineUrl", SchemaNode::String),
    ])
}

fn conflicts_entry() -> SchemaNode {
    SchemaNode::mapping([
        Field::required("uuid", SchemaNode::String),
        Field::required("errorMessage", SchemaNode::String),
        Field::required("offlineFileName", SchemaNode::String),
    ])
}
