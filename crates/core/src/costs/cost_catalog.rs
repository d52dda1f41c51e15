//! The static catalog of ancillary cost categories.
//!
//! This is the only definition of the cost fields. Input collection walks
//! [`categories`], and the table importer maps column headers to fields
//! through [`field`] / [`is_cost_field`].

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::costs_model::{CostCategory, CostField};

const LOGISTICS_FIELDS: &[CostField] = &[
    CostField {
        key: "transporte",
        label: "Transporte",
        help: "Costo de traslado de mercancías",
    },
    CostField {
        key: "almacenamiento",
        label: "Almacenamiento",
        help: "Costo de bodegaje y manejo de inventario",
    },
    CostField {
        key: "combustible",
        label: "Combustible",
        help: "Gastos de combustible para transporte",
    },
    CostField {
        key: "envio",
        label: "Envío",
        help: "Costo de entrega al cliente final",
    },
];

const PERSONNEL_FIELDS: &[CostField] = &[
    CostField {
        key: "mano_obra",
        label: "Mano de Obra",
        help: "Costo directo de trabajadores en producción",
    },
    CostField {
        key: "hora_hombre",
        label: "Hora Hombre",
        help: "Servicios profesionales y consultoría",
    },
];

const OPERATING_FIELDS: &[CostField] = &[
    CostField {
        key: "marketing",
        label: "Marketing",
        help: "Gastos en publicidad y promoción",
    },
    CostField {
        key: "publicidad",
        label: "Publicidad Digital",
        help: "Anuncios online y campañas digitales",
    },
    CostField {
        key: "seguros",
        label: "Seguros",
        help: "Pólizas de seguro para productos/servicios",
    },
];

const ADMINISTRATIVE_FIELDS: &[CostField] = &[
    CostField {
        key: "alquiler",
        label: "Alquiler/Instalaciones",
        help: "Arriendo de oficinas o locales",
    },
    CostField {
        key: "servicios_basicos",
        label: "Servicios Básicos",
        help: "Luz, agua, gas",
    },
    CostField {
        key: "internet",
        label: "Internet",
        help: "Conexión a internet y telecomunicaciones",
    },
    CostField {
        key: "telefono",
        label: "Teléfono",
        help: "Servicios telefónicos",
    },
];

const FINANCIAL_FIELDS: &[CostField] = &[
    CostField {
        key: "intereses",
        label: "Intereses",
        help: "Intereses por financiamiento",
    },
    CostField {
        key: "comisiones_bancarias",
        label: "Comisiones Bancarias",
        help: "Gastos bancarios y financieros",
    },
];

const OTHER_FIELDS: &[CostField] = &[
    CostField {
        key: "mantenimiento",
        label: "Mantenimiento",
        help: "Reparaciones y mantenimiento de equipos",
    },
    CostField {
        key: "depreciacion",
        label: "Depreciación",
        help: "Depreciación de equipos y maquinaria",
    },
    CostField {
        key: "gastos_generales",
        label: "Gastos Generales",
        help: "Otros gastos no categorizados",
    },
];

/// All cost categories, in display order.
pub const COST_CATEGORIES: &[CostCategory] = &[
    CostCategory {
        key: "logisticos",
        title: "Costos Logísticos",
        description: "Transporte, almacenamiento y distribución",
        fields: LOGISTICS_FIELDS,
    },
    CostCategory {
        key: "personal",
        title: "Costos de Personal",
        description: "Mano de obra y servicios profesionales",
        fields: PERSONNEL_FIELDS,
    },
    CostCategory {
        key: "operativos",
        title: "Costos Operativos",
        description: "Marketing, seguros y promoción",
        fields: OPERATING_FIELDS,
    },
    CostCategory {
        key: "administrativos",
        title: "Costos Administrativos",
        description: "Gastos generales de funcionamiento",
        fields: ADMINISTRATIVE_FIELDS,
    },
    CostCategory {
        key: "financieros",
        title: "Costos Financieros",
        description: "Intereses y comisiones bancarias",
        fields: FINANCIAL_FIELDS,
    },
    CostCategory {
        key: "otros",
        title: "Otros Costos",
        description: "Mantenimiento y gastos varios",
        fields: OTHER_FIELDS,
    },
];

pub fn categories() -> &'static [CostCategory] {
    COST_CATEGORIES
}

/// Iterates every cost field across all categories, in display order.
pub fn all_fields() -> impl Iterator<Item = &'static CostField> {
    COST_CATEGORIES
        .iter()
        .flat_map(|category| category.fields.iter())
}

pub fn field(key: &str) -> Option<&'static CostField> {
    all_fields().find(|field| field.key == key)
}

pub fn is_cost_field(key: &str) -> bool {
    field(key).is_some()
}

/// Sums a map of cost amounts keyed by field key.
///
/// Keys that are not catalog fields are ignored and logged; negative amounts
/// count as zero, matching the form inputs which have a minimum of zero.
pub fn sum_costs(costs: &HashMap<String, Decimal>) -> Decimal {
    costs
        .iter()
        .filter_map(|(key, amount)| {
            if is_cost_field(key) {
                Some((*amount).max(Decimal::ZERO))
            } else {
                log::warn!("Ignoring unknown cost field '{}'", key);
                None
            }
        })
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(categories().len(), 6);
        for category in categories() {
            assert!(
                (2..=4).contains(&category.fields.len()),
                "{} has {} fields",
                category.key,
                category.fields.len()
            );
        }
        assert_eq!(all_fields().count(), 18);
    }

    #[test]
    fn test_field_keys_are_unique() {
        let keys: HashSet<&str> = all_fields().map(|f| f.key).collect();
        assert_eq!(keys.len(), all_fields().count());
    }

    #[test]
    fn test_field_lookup() {
        let field = field("mano_obra").unwrap();
        assert_eq!(field.label, "Mano de Obra");
        assert!(is_cost_field("gastos_generales"));
        assert!(!is_cost_field("Transporte"));
        assert!(!is_cost_field("costo_base"));

        let category = &categories()[4];
        assert_eq!(category.key, "financieros");
        assert!(category.field("intereses").is_some());
        assert!(category.field("transporte").is_none());
    }

    #[test]
    fn test_sum_costs_ignores_unknown_and_negative() {
        let mut costs = HashMap::new();
        costs.insert("transporte".to_string(), dec!(1500));
        costs.insert("alquiler".to_string(), dec!(2500.50));
        costs.insert("propinas".to_string(), dec!(999));
        costs.insert("seguros".to_string(), dec!(-100));

        assert_eq!(sum_costs(&costs), dec!(4000.50));
        assert_eq!(sum_costs(&HashMap::new()), Decimal::ZERO);
    }
}
