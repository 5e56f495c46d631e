//! Filter schema endpoint; the location cascade comes from the catalog.

use std::collections::{BTreeMap, BTreeSet};

use common::auction_filters::auction_filter_schema;
use common::filter_schema::{FilterSchema, LocationNode};
use common::property::Property;

use crate::db_utils::catalog_utils::get_catalog;

pub fn location_tree(properties: &[Property]) -> Vec<LocationNode> {
    let mut states: BTreeMap<&str, BTreeMap<&str, BTreeSet<&str>>> = BTreeMap::new();
    for property in properties {
        if property.state.is_empty() {
            continue;
        }
        let cities = states.entry(property.state.as_str()).or_default();
        if property.city.is_empty() {
            continue;
        }
        let neighborhoods = cities.entry(property.city.as_str()).or_default();
        if !property.neighborhood.is_empty() {
            neighborhoods.insert(property.neighborhood.as_str());
        }
    }

    let node = |value: &str, children: Vec<LocationNode>| LocationNode {
        value: value.to_string(),
        label: value.to_string(),
        children,
    };
    states
        .into_iter()
        .map(|(state, cities)| {
            let cities = cities
                .into_iter()
                .map(|(city, neighborhoods)| {
                    let neighborhoods = neighborhoods.into_iter().map(|n| node(n, Vec::new())).collect();
                    node(city, neighborhoods)
                })
                .collect();
            node(state, cities)
        })
        .collect()
}

pub async fn get_filter_schema() -> anyhow::Result<FilterSchema> {
    let catalog = get_catalog().await?;
    let schema = auction_filter_schema(location_tree(catalog));
    schema.validate()?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db_utils::catalog_utils::parse_catalog;

    #[test]
    fn tree_nests_states_cities_and_neighborhoods() {
        let json = r#"[
            {"id":"a","identification":"A","type":"Casa","appraisalValue":1,"firstSaleDate":null,"firstSalePrice":1,
             "firstSaleDiscountPercent":0,"secondSaleDate":null,"secondSalePrice":1,"secondSaleDiscountPercent":0,
             "state":"SP","city":"Santos","neighborhood":"Gonzaga"},
            {"id":"b","identification":"B","type":"Casa","appraisalValue":1,"firstSaleDate":null,"firstSalePrice":1,
             "firstSaleDiscountPercent":0,"secondSaleDate":null,"secondSalePrice":1,"secondSaleDiscountPercent":0,
             "state":"SP","city":"Campinas"},
            {"id":"c","identification":"C","type":"Casa","appraisalValue":1,"firstSaleDate":null,"firstSalePrice":1,
             "firstSaleDiscountPercent":0,"secondSaleDate":null,"secondSalePrice":1,"secondSaleDiscountPercent":0,
             "state":"BA","city":"Salvador","neighborhood":"Barra"}
        ]"#;
        let tree = location_tree(&parse_catalog(json).unwrap());
        assert_eq!(tree.iter().map(|n| n.value.as_str()).collect::<Vec<_>>(), vec!["BA", "SP"]);
        let sp = &tree[1];
        assert_eq!(sp.children.iter().map(|n| n.value.as_str()).collect::<Vec<_>>(), vec!["Campinas", "Santos"]);
        assert!(sp.children[0].children.is_empty());
        assert_eq!(sp.children[1].children[0].value, "Gonzaga");
    }
}
