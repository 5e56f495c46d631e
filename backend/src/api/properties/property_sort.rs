//! `sort=field:order` handling for the listing.

use std::cmp::Ordering;

use common::filter_schema::{SortOrder, SortSpec};
use common::property::Property;
use tracing::debug;

pub const SORT_FIELDS: [&str; 7] = [
    "dataPrimeiroLeilao",
    "dataSegundoLeilao",
    "precoPrimeiroLeilao",
    "precoSegundoLeilao",
    "descontoPrimeiroLeilao",
    "descontoSegundoLeilao",
    "valorAvaliacao",
];

fn compare_field(field: &str, a: &Property, b: &Property) -> Option<Ordering> {
    let ordering = match field {
        "dataPrimeiroLeilao" => a.first_sale_date.cmp(&b.first_sale_date),
        "dataSegundoLeilao" => a.second_sale_date.cmp(&b.second_sale_date),
        "precoPrimeiroLeilao" => a.first_sale_price.total_cmp(&b.first_sale_price),
        "precoSegundoLeilao" => a.second_sale_price.total_cmp(&b.second_sale_price),
        "descontoPrimeiroLeilao" => a.first_sale_discount_percent.total_cmp(&b.first_sale_discount_percent),
        "descontoSegundoLeilao" => a.second_sale_discount_percent.total_cmp(&b.second_sale_discount_percent),
        "valorAvaliacao" => a.appraisal_value.total_cmp(&b.appraisal_value),
        _ => return None,
    };
    Some(ordering)
}

/// Sorts by each spec in turn: the first spec decides, later ones break ties.
/// Unknown fields are skipped.
pub fn sort_properties(properties: &mut [Property], specs: &[SortSpec]) {
    let known = specs
        .iter()
        .filter(|spec| {
            let known = SORT_FIELDS.contains(&spec.field.as_str());
            if !known {
                debug!("ignoring unknown sort field {}", spec.field);
            }
            known
        })
        .collect::<Vec<_>>();
    if known.is_empty() {
        return;
    }
    properties.sort_by(|a, b| {
        for spec in &known {
            let ordering = compare_field(&spec.field, a, b).unwrap_or(Ordering::Equal);
            let ordering = match spec.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}
