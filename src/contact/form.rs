use std::collections::BTreeMap;

use log::debug;

/// Form inputs. The key is the `name` attribute of the input element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Email => "email",
            Field::Phone => "telefone",
            Field::Company => "empresa",
            Field::Service => "servico",
            Field::Message => "mensagem",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "nome" => Some(Field::Name),
            "email" => Some(Field::Email),
            "telefone" => Some(Field::Phone),
            "empresa" => Some(Field::Company),
            "servico" => Some(Field::Service),
            "mensagem" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "Email",
            Field::Phone => "Telefone",
            Field::Company => "Empresa",
            Field::Service => "Serviço de interesse",
            Field::Message => "Mensagem",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Seu nome completo",
            Field::Email => "seu@email.com",
            Field::Phone => "(00) 00000-0000",
            Field::Company => "Nome da sua empresa",
            Field::Service => "Selecione um serviço",
            Field::Message => "Descreva seu projeto ou necessidade...",
        }
    }
}

pub const SERVICE_OPTIONS: &[&str] = &[
    "Desenvolvimento de Software",
    "Design & Social Media",
    "Personalização de Produtos",
    "Sinalização",
];

/// The two shapes the form has had.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    /// Free-text quote request with an optional company.
    Quote,
    /// Picks a service of interest instead of naming a company.
    ServiceRequest,
}

impl FormVariant {
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormVariant::Quote => &[Field::Name, Field::Email, Field::Phone, Field::Company, Field::Message],
            FormVariant::ServiceRequest => &[Field::Name, Field::Email, Field::Phone, Field::Service, Field::Message],
        }
    }

    pub fn required(self) -> &'static [Field] {
        match self {
            FormVariant::Quote => &[Field::Name, Field::Email, Field::Message],
            FormVariant::ServiceRequest => &[Field::Name, Field::Email, Field::Service],
        }
    }

    pub fn is_required(self, field: Field) -> bool {
        self.required().contains(&field)
    }
}

/// Current value of every input in the form. The key set is fixed by the
/// variant and never grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    variant: FormVariant,
    values: BTreeMap<Field, String>,
}

impl ContactForm {
    pub fn new(variant: FormVariant) -> Self {
        let values = variant.fields().iter().map(|field| (*field, String::new())).collect();
        Self { variant, values }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Empty for fields the variant does not have.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        match Field::from_key(name).and_then(|field| self.values.get_mut(&field)) {
            Some(slot) => *slot = value.into(),
            None => debug!("ignoring input for unknown form field `{name}`"),
        }
    }

    /// Required fields that are empty or only whitespace, in form order.
    pub fn missing_required(&self) -> Vec<Field> {
        self.variant
            .required()
            .iter()
            .copied()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    pub fn reset(&mut self) {
        self.values.values_mut().for_each(String::clear);
    }

    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}
