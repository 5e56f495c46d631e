//! The auction listing filter schema served by `GET /api/properties/filters`.
//!
//! The first version shipped hard-coded in the filter bar; later versions added
//! expense payment rules and the location cascade and moved the schema behind
//! the API. Both are kept so the codec can be exercised against schema drift.

use std::collections::BTreeMap;

use crate::filter_schema::{ChoiceOption, CompositePart, FilterDefinition, FilterKind, FilterSchema, LocationNode, RangeBounds, SortOrder};
use crate::selections::{FilterValue, LocationValue, RangeValue};

pub const DEFAULT_SORT: &str = "descontoSegundoLeilao:desc";

pub const PRICE_BOUNDS: RangeBounds = RangeBounds { min: 0.0, max: 5_000_000.0, step: 5_000.0 };

pub const DISCOUNT_BOUNDS: RangeBounds = RangeBounds { min: 0.0, max: 100.0, step: 1.0 };

fn sort_filter() -> FilterDefinition {
    use SortOrder::{Asc, Desc};
    let options = [
        ("dataPrimeiroLeilao", Asc, "Data do primeiro leilão (asc)"),
        ("dataSegundoLeilao", Asc, "Data do segundo leilão (asc)"),
        ("precoPrimeiroLeilao", Asc, "Menor preço do primeiro leilão"),
        ("precoPrimeiroLeilao", Desc, "Maior preço do primeiro leilão"),
        ("descontoPrimeiroLeilao", Desc, "Maior desconto do primeiro leilão"),
        ("precoSegundoLeilao", Asc, "Menor preço do segundo leilão"),
        ("precoSegundoLeilao", Desc, "Maior preço do segundo leilão"),
        ("descontoSegundoLeilao", Desc, "Maior desconto do segundo leilão"),
    ]
    .into_iter()
    .map(|(field, order, label)| ChoiceOption::sorting(format!("{field}:{order}"), label, field, order))
    .collect();

    FilterDefinition {
        key: "sort".to_string(),
        label: "Ordenação".to_string(),
        title: "Escolha a ordenação".to_string(),
        kind: FilterKind::SingleChoice { options },
        default_value: Some(FilterValue::Text(DEFAULT_SORT.to_string())),
    }
}

fn multi_choice(key: &str, label: &str, title: &str, options: &[(&str, &str)]) -> FilterDefinition {
    FilterDefinition {
        key: key.to_string(),
        label: label.to_string(),
        title: title.to_string(),
        kind: FilterKind::MultiChoice {
            options: options.iter().map(|(value, label)| ChoiceOption::new(*value, *label)).collect(),
        },
        default_value: Some(FilterValue::List(Vec::new())),
    }
}

fn price_filter() -> FilterDefinition {
    FilterDefinition {
        key: "price".to_string(),
        label: "Preço".to_string(),
        title: "Defina o preço desejado".to_string(),
        kind: FilterKind::Range { bounds: PRICE_BOUNDS },
        default_value: Some(FilterValue::Range(RangeValue::full(&PRICE_BOUNDS))),
    }
}

fn discounts_filter() -> FilterDefinition {
    let parts = vec![
        CompositePart { key: "discount1".into(), param_prefix: "firstDiscount".into(), label: "Primeira Praça".into() },
        CompositePart { key: "discount2".into(), param_prefix: "secondDiscount".into(), label: "Segunda Praça".into() },
    ];
    let default_value = parts
        .iter()
        .map(|part| (part.key.clone(), RangeValue::full(&DISCOUNT_BOUNDS)))
        .collect::<BTreeMap<_, _>>();
    FilterDefinition {
        key: "discounts".to_string(),
        label: "Descontos".to_string(),
        title: "Defina os intervalos de desconto (%)".to_string(),
        kind: FilterKind::CompositeRange { bounds: DISCOUNT_BOUNDS, parts },
        default_value: Some(FilterValue::Composite(default_value)),
    }
}

fn location_filter(tree: Vec<LocationNode>) -> FilterDefinition {
    FilterDefinition {
        key: "location".to_string(),
        label: "Localização".to_string(),
        title: "Escolha estado, cidade e bairro".to_string(),
        kind: FilterKind::Hierarchical { tree },
        default_value: Some(FilterValue::Location(LocationValue::default())),
    }
}

fn property_type_filter() -> FilterDefinition {
    multi_choice(
        "propertyType",
        "Tipo",
        "Selecione o(s) tipo(s) de imóvel",
        &[
            ("Apartamento", "Apartamento"),
            ("Casa", "Casa"),
            ("Comercial", "Comercial"),
            ("Galpão", "Galpão"),
            ("Imóvel rural", "Imóvel rural"),
            ("Loja", "Loja"),
            ("Prédio", "Prédio"),
            ("Sala", "Sala"),
            ("Sobrado", "Sobrado"),
            ("Terreno", "Terreno"),
        ],
    )
}

fn modality_filter() -> FilterDefinition {
    multi_choice(
        "modality",
        "Modalidade",
        "Escolha a modalidade",
        &[
            ("sfiEditalUnico", "Leilão SFI - Edital Único"),
            ("vendaDiretaOnline", "Venda Direta Online"),
            ("vendaOnline", "Venda Online"),
            ("licitacaoAberta", "Licitação Aberta"),
        ],
    )
}

fn payment_conditions_filter() -> FilterDefinition {
    multi_choice(
        "paymentConditions",
        "Pagamento",
        "Formas de pagamento",
        &[("financiamento", "Financiamento"), ("aVista", "À Vista"), ("fgts", "FGTS")],
    )
}

fn expense_payment_rules_filter() -> FilterDefinition {
    multi_choice(
        "expensePaymentRules",
        "Despesas",
        "Regras de pagamento de despesas",
        &[
            ("condominioComprador", "Condomínio por conta do comprador"),
            ("iptuComprador", "IPTU por conta do comprador"),
            ("despesasVendedor", "Despesas pagas pelo vendedor"),
        ],
    )
}

/// The schema as the filter bar first shipped it.
pub fn auction_filter_schema_v1() -> FilterSchema {
    FilterSchema::new(vec![
        sort_filter(),
        property_type_filter(),
        modality_filter(),
        payment_conditions_filter(),
        price_filter(),
        discounts_filter(),
    ])
}

/// Current schema; `location_tree` feeds the state → city → neighborhood pickers.
pub fn auction_filter_schema(location_tree: Vec<LocationNode>) -> FilterSchema {
    FilterSchema::new(vec![
        sort_filter(),
        property_type_filter(),
        modality_filter(),
        payment_conditions_filter(),
        expense_payment_rules_filter(),
        price_filter(),
        discounts_filter(),
        location_filter(location_tree),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_schema_extends_the_first_version() {
        let v1 = auction_filter_schema_v1();
        let current = auction_filter_schema(vec![]);
        for filter in v1.iter() {
            assert_eq!(current.get(&filter.key), Some(filter));
        }
        assert!(v1.get("location").is_none());
        assert!(current.get("expensePaymentRules").is_some());
    }

    #[test]
    fn sort_option_values_match_their_sort_specs() {
        let schema = auction_filter_schema_v1();
        let sort = schema.get("sort").unwrap();
        assert!(sort.is_sort());
        for option in sort.kind.options() {
            assert_eq!(option.sort.as_ref().unwrap().to_string(), option.value);
        }
        assert!(sort.option(DEFAULT_SORT).is_some());
    }
}
