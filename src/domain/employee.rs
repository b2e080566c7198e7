//! Employee record and its optional company/address sub-records.
//!
//! Records are deserialized straight from the directory API, which speaks
//! camelCase JSON and carries many more fields than the directory needs. Unknown
//! fields are ignored; missing optional fields deserialize to `None` or empty
//! strings so a sparse record never fails the whole page.

use serde::{Deserialize, Serialize};

use super::text::format_phone_number;

/// A single employee as returned by the directory API.
///
/// `id` is the natural key: no two employees in a loaded set share one.
///
/// # Examples
///
/// ```
/// use employee_directory::domain::{Company, Employee};
///
/// let ada = Employee::new(1, "Ada", "Lovelace", "ada@x.com")
///     .with_company(Company::new("Analytical", "Engineer", "R&D"));
/// assert_eq!(ada.full_name(), "Ada Lovelace");
/// assert_eq!(ada.initials(), "AL");
/// assert_eq!(ada.department(), Some("R&D"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// URL of the employee's avatar image.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Employer details attached to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Postal address attached to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street line. The API calls this field `address`.
    #[serde(default, rename = "address")]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
}

impl Employee {
    /// Creates an employee with the required fields and no sub-records.
    #[must_use]
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: String::new(),
            image: String::new(),
            company: None,
            address: None,
        }
    }

    #[must_use]
    pub fn with_company(mut self, company: Company) -> Self {
        self.company = Some(company);
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Returns `"first last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the upper-cased first letters of the first and last name.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.title.as_deref())
    }

    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.department.as_deref())
    }

    /// Phone number formatted as `(XXX) XXX-XXXX` when it has exactly ten digits.
    #[must_use]
    pub fn formatted_phone(&self) -> String {
        format_phone_number(&self.phone)
    }
}

impl Company {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: Some(title.into()),
            department: Some(department.into()),
        }
    }
}

impl Address {
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_payload_and_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "firstName": "Emily",
            "lastName": "Johnson",
            "maidenName": "Smith",
            "age": 28,
            "email": "emily.johnson@x.dummyjson.com",
            "phone": "+81 965-431-3024",
            "image": "https://dummyjson.com/icon/emilys/128",
            "address": {
                "address": "626 Main Street",
                "city": "Phoenix",
                "state": "Mississippi",
                "postalCode": "29112",
                "country": "United States"
            },
            "company": {
                "department": "Engineering",
                "name": "Dooley, Kozey and Cronin",
                "title": "Sales Manager"
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).expect("payload should decode");
        assert_eq!(employee.id, 1);
        assert_eq!(employee.full_name(), "Emily Johnson");
        assert_eq!(employee.department(), Some("Engineering"));
        assert_eq!(employee.title(), Some("Sales Manager"));
        let address = employee.address.expect("address present");
        assert_eq!(address.street, "626 Main Street");
        assert_eq!(address.postal_code, "29112");
    }

    #[test]
    fn tolerates_missing_sub_records() {
        let json = r#"{ "id": 7, "firstName": "Grace", "lastName": "Hopper" }"#;
        let employee: Employee = serde_json::from_str(json).expect("sparse payload should decode");
        assert!(employee.company.is_none());
        assert!(employee.address.is_none());
        assert_eq!(employee.email, "");
        assert_eq!(employee.title(), None);
    }

    #[test]
    fn initials_are_uppercased() {
        let employee = Employee::new(2, "grace", "hopper", "g@x.com");
        assert_eq!(employee.initials(), "GH");
    }

    #[test]
    fn formats_ten_digit_phone_numbers() {
        let employee = Employee::new(3, "A", "B", "a@b.c").with_phone("555-123-4567");
        assert_eq!(employee.formatted_phone(), "(555) 123-4567");
    }
}
