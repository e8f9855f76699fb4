//! Budget service for creation, editing and listing.

use atrio_shared::types::{BudgetId, BudgetItemId, PageRequest, PageResponse};
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::{
    Budget, BudgetFilter, BudgetInput, BudgetItem, BudgetItemInput, BudgetItemUpdate, BudgetStatus,
    Client, MAX_AMOUNT, MAX_QUANTITY, normalize_unit,
};
use crate::company::Company;
use crate::plan::{PlanLimits, Resource, SubscriptionService};

/// Prefix of budget reference numbers.
pub const NUMBER_PREFIX: &str = "BGT-";

const NUMBER_SUFFIX_LEN: usize = 5;

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Generates a reference number such as `BGT-7K2QD`.
    #[must_use]
    pub fn generate_number() -> String {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(NUMBER_SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_uppercase())
            .collect();
        format!("{NUMBER_PREFIX}{suffix}")
    }

    /// Creates a budget for the company.
    ///
    /// The tax rate defaults to the country's VAT rate and the status to Draft.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad client or item data, and
    /// `BudgetError::Plan` when the item count exceeds the plan.
    pub fn create(
        company: &Company,
        input: BudgetInput,
        limits: &PlanLimits,
        now: DateTime<Utc>,
    ) -> Result<Budget, BudgetError> {
        let mut budget = Budget {
            id: BudgetId::new(),
            number: Self::generate_number(),
            date: now,
            valid_until: None,
            company_id: company.id,
            client: Client::default(),
            items: Vec::new(),
            expenses: Vec::new(),
            payments: Vec::new(),
            notes: String::new(),
            status: BudgetStatus::Draft,
            tax_rate: company.country.profile().default_vat_rate(),
            is_vat_enabled: true,
            updated_at: now,
        };

        Self::update(&mut budget, company, input, limits, now)?;
        Ok(budget)
    }

    /// Replaces the editable contents of a budget.
    ///
    /// Identity, number, issue date, expenses and payments are kept. Items
    /// carrying the ID of an existing item keep that ID. Omitted tax settings
    /// stay as they were.
    ///
    /// # Errors
    ///
    /// Same as [`BudgetService::create`]. The budget is unchanged on error.
    pub fn update(
        budget: &mut Budget,
        company: &Company,
        input: BudgetInput,
        limits: &PlanLimits,
        now: DateTime<Utc>,
    ) -> Result<(), BudgetError> {
        validate_client(&input.client)?;
        let tax_rate = input.tax_rate.unwrap_or(budget.tax_rate);
        validate_tax_rate(tax_rate)?;
        if input
            .valid_until
            .is_some_and(|day| day < budget.date.date_naive())
        {
            return Err(BudgetError::ValidityBeforeIssue);
        }

        let plan = SubscriptionService::effective_plan(company, now.date_naive());
        limits.ensure_within(plan, Resource::BudgetItems, input.items.len())?;

        let items = input
            .items
            .into_iter()
            .map(|item| {
                let id = item
                    .id
                    .filter(|id| budget.items.iter().any(|existing| existing.id == *id));
                build_item(company, item, id)
            })
            .collect::<Result<Vec<_>, _>>()?;

        budget.client = trim_client(input.client);
        budget.items = items;
        if let Some(notes) = input.notes {
            budget.notes = notes;
        }
        budget.tax_rate = tax_rate;
        if let Some(enabled) = input.is_vat_enabled {
            budget.is_vat_enabled = enabled;
        }
        budget.valid_until = input.valid_until;
        if let Some(status) = input.status {
            budget.status = status;
        }
        budget.updated_at = now;
        Ok(())
    }

    /// Appends a line item.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Plan` when the plan's item cap is reached, or a
    /// validation error for negative quantity or price.
    pub fn add_item(
        budget: &mut Budget,
        company: &Company,
        input: BudgetItemInput,
        limits: &PlanLimits,
        now: DateTime<Utc>,
    ) -> Result<BudgetItem, BudgetError> {
        let plan = SubscriptionService::effective_plan(company, now.date_naive());
        limits.ensure_can_add(plan, Resource::BudgetItems, budget.items.len())?;

        let item = build_item(company, input, None)?;
        budget.items.push(item.clone());
        budget.updated_at = now;
        Ok(item)
    }

    /// Applies a partial update to a line item.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::ItemNotFound` for an unknown item, or a
    /// validation error for negative quantity or price.
    pub fn update_item(
        budget: &mut Budget,
        item_id: BudgetItemId,
        update: BudgetItemUpdate,
        now: DateTime<Utc>,
    ) -> Result<BudgetItem, BudgetError> {
        if let Some(quantity) = update.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(price) = update.price_per_unit {
            validate_price(price)?;
        }

        let item = budget
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(BudgetError::ItemNotFound(item_id))?;

        if let Some(description) = update.description {
            item.description = description.trim().to_string();
        }
        if let Some(quantity) = update.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = update.unit {
            item.unit = normalize_unit(Some(unit));
        }
        if let Some(price) = update.price_per_unit {
            item.price_per_unit = price;
        }
        if let Some(category) = update.category {
            item.category = category;
        }

        let item = item.clone();
        budget.updated_at = now;
        Ok(item)
    }

    /// Removes a line item and returns it.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::ItemNotFound` for an unknown item.
    pub fn remove_item(
        budget: &mut Budget,
        item_id: BudgetItemId,
        now: DateTime<Utc>,
    ) -> Result<BudgetItem, BudgetError> {
        let pos = budget
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(BudgetError::ItemNotFound(item_id))?;

        budget.updated_at = now;
        Ok(budget.items.remove(pos))
    }

    /// Moves a budget to any status.
    pub fn set_status(budget: &mut Budget, status: BudgetStatus, now: DateTime<Utc>) {
        budget.status = status;
        budget.updated_at = now;
    }

    /// Filters, orders newest first and paginates a company's budgets.
    #[must_use]
    pub fn query(
        budgets: Vec<Budget>,
        filter: &BudgetFilter,
        page: PageRequest,
    ) -> PageResponse<Budget> {
        let mut matching: Vec<Budget> = budgets.into_iter().filter(|b| filter.matches(b)).collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        page.paginate(matching)
    }
}

fn build_item(
    company: &Company,
    input: BudgetItemInput,
    id: Option<BudgetItemId>,
) -> Result<BudgetItem, BudgetError> {
    validate_quantity(input.quantity)?;
    validate_price(input.price_per_unit)?;

    Ok(BudgetItem {
        id: id.unwrap_or_default(),
        description: input.description.trim().to_string(),
        quantity: input.quantity,
        unit: normalize_unit(input.unit),
        price_per_unit: input.price_per_unit,
        category: input.category.unwrap_or_else(|| company.default_specialty()),
    })
}

fn trim_client(client: Client) -> Client {
    Client {
        name: client.name.trim().to_string(),
        contact_name: client.contact_name.trim().to_string(),
        address: client.address.trim().to_string(),
        email: client.email.trim().to_string(),
        phone: client.phone.trim().to_string(),
        nif: client.nif.trim().to_string(),
    }
}

fn validate_client(client: &Client) -> Result<(), BudgetError> {
    if client.name.trim().is_empty() {
        return Err(BudgetError::MissingClientName);
    }
    Ok(())
}

fn validate_quantity(quantity: Decimal) -> Result<(), BudgetError> {
    if quantity.is_sign_negative() && !quantity.is_zero() {
        return Err(BudgetError::NegativeQuantity);
    }
    if quantity > MAX_QUANTITY {
        return Err(BudgetError::QuantityTooLarge(MAX_QUANTITY));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), BudgetError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(BudgetError::NegativePrice);
    }
    if price > MAX_AMOUNT {
        return Err(BudgetError::PriceTooLarge(MAX_AMOUNT));
    }
    Ok(())
}

fn validate_tax_rate(rate: Decimal) -> Result<(), BudgetError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
        return Err(BudgetError::InvalidTaxRate(rate));
    }
    Ok(())
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::company::{CompanyService, NewCompany, Specialty};
    use crate::plan::PlanError;
    use atrio_shared::types::CountryCode;
    use chrono::{Duration, NaiveDate, TimeZone};
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 15, 9, 30, 0).unwrap()
    }

    fn company(country: CountryCode) -> Company {
        CompanyService::create(
            NewCompany {
                name: "Obras Silva".to_string(),
                email: "geral@silva.pt".to_string(),
                phone: "912345678".to_string(),
                country,
            },
            now(),
        )
    }

    fn item(quantity: Decimal, price: Decimal) -> BudgetItemInput {
        BudgetItemInput {
            id: None,
            description: "Reboco exterior".to_string(),
            quantity,
            unit: Some("m2".to_string()),
            price_per_unit: price,
            category: None,
        }
    }

    fn input(items: Vec<BudgetItemInput>) -> BudgetInput {
        BudgetInput {
            client: Client {
                name: " Maria Costa ".to_string(),
                ..Client::default()
            },
            items,
            notes: None,
            tax_rate: None,
            is_vat_enabled: None,
            valid_until: None,
            status: None,
        }
    }

    #[test]
    fn test_generate_number_format() {
        let number = BudgetService::generate_number();
        assert_eq!(number.len(), 9);
        assert!(number.starts_with("BGT-"));
        assert!(
            number[4..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_create_applies_defaults() {
        let c = company(CountryCode::PT);
        let budget =
            BudgetService::create(&c, input(vec![item(dec!(10), dec!(12.5))]), &PlanLimits::default(), now())
                .unwrap();

        assert_eq!(budget.company_id, c.id);
        assert_eq!(budget.client.name, "Maria Costa");
        assert_eq!(budget.status, BudgetStatus::Draft);
        assert_eq!(budget.tax_rate, dec!(23));
        assert!(budget.is_vat_enabled);
        assert_eq!(budget.items[0].category, Specialty::Masonry);
        assert_eq!(budget.date, now());
        assert_eq!(budget.total(), dec!(153.75));
    }

    #[test]
    fn test_create_uses_country_vat() {
        let c = company(CountryCode::CH);
        let budget = BudgetService::create(&c, input(vec![]), &PlanLimits::default(), now()).unwrap();
        assert_eq!(budget.tax_rate, dec!(8.1));
    }

    #[test]
    fn test_create_requires_client_name() {
        let c = company(CountryCode::PT);
        let mut bad = input(vec![]);
        bad.client.name = "  ".to_string();
        assert_eq!(
            BudgetService::create(&c, bad, &PlanLimits::default(), now()),
            Err(BudgetError::MissingClientName)
        );
    }

    #[test]
    fn test_create_rejects_bad_numbers() {
        let c = company(CountryCode::PT);
        let limits = PlanLimits::default();

        let err = BudgetService::create(&c, input(vec![item(dec!(-1), dec!(1))]), &limits, now());
        assert_eq!(err, Err(BudgetError::NegativeQuantity));

        let err = BudgetService::create(&c, input(vec![item(dec!(1), dec!(-1))]), &limits, now());
        assert_eq!(err, Err(BudgetError::NegativePrice));

        let huge = dec!(100000000000000000000);
        let err = BudgetService::create(&c, input(vec![item(huge, dec!(1))]), &limits, now());
        assert_eq!(err, Err(BudgetError::QuantityTooLarge(MAX_QUANTITY)));

        let err = BudgetService::create(&c, input(vec![item(dec!(1), huge)]), &limits, now());
        assert_eq!(err, Err(BudgetError::PriceTooLarge(MAX_AMOUNT)));

        let at_cap = BudgetService::create(&c, input(vec![item(MAX_QUANTITY, MAX_AMOUNT)]), &limits, now());
        assert!(at_cap.is_ok());

        let mut bad = input(vec![]);
        bad.tax_rate = Some(dec!(101));
        assert_eq!(
            BudgetService::create(&c, bad, &limits, now()),
            Err(BudgetError::InvalidTaxRate(dec!(101)))
        );
    }

    #[test]
    fn test_free_plan_item_limit() {
        let c = company(CountryCode::PT);
        let limits = PlanLimits::default();

        let three = vec![item(dec!(1), dec!(1)), item(dec!(1), dec!(1)), item(dec!(1), dec!(1))];
        assert!(matches!(
            BudgetService::create(&c, input(three), &limits, now()),
            Err(BudgetError::Plan(PlanError::LimitReached { limit: 2, .. }))
        ));

        let mut budget = BudgetService::create(&c, input(vec![item(dec!(1), dec!(1))]), &limits, now()).unwrap();
        BudgetService::add_item(&mut budget, &c, item(dec!(2), dec!(3)), &limits, now()).unwrap();
        let err = BudgetService::add_item(&mut budget, &c, item(dec!(2), dec!(3)), &limits, now());
        assert!(matches!(err, Err(BudgetError::Plan(_))));
        assert_eq!(budget.items.len(), 2);
    }

    #[test]
    fn test_premium_adds_without_limit() {
        let mut c = company(CountryCode::PT);
        let limits = PlanLimits::default();
        SubscriptionService::upgrade(&mut c, &limits, now().date_naive());

        let mut budget = BudgetService::create(&c, input(vec![]), &limits, now()).unwrap();
        for _ in 0..10 {
            BudgetService::add_item(&mut budget, &c, item(dec!(1), dec!(1)), &limits, now()).unwrap();
        }
        assert_eq!(budget.items.len(), 10);
    }

    #[test]
    fn test_expired_premium_is_limited_again() {
        let mut c = company(CountryCode::PT);
        let limits = PlanLimits::default();
        SubscriptionService::upgrade(&mut c, &limits, now().date_naive());
        let later = now() + Duration::days(31);

        let mut budget = BudgetService::create(&c, input(vec![]), &limits, later).unwrap();
        BudgetService::add_item(&mut budget, &c, item(dec!(1), dec!(1)), &limits, later).unwrap();
        BudgetService::add_item(&mut budget, &c, item(dec!(1), dec!(1)), &limits, later).unwrap();
        assert!(BudgetService::add_item(&mut budget, &c, item(dec!(1), dec!(1)), &limits, later).is_err());
    }

    #[test]
    fn test_update_keeps_identity_and_known_item_ids() {
        let c = company(CountryCode::PT);
        let limits = PlanLimits::default();
        let mut budget = BudgetService::create(&c, input(vec![item(dec!(1), dec!(100))]), &limits, now()).unwrap();
        let (id, number, item_id) = (budget.id, budget.number.clone(), budget.items[0].id);

        let mut kept = item(dec!(2), dec!(100));
        kept.id = Some(item_id);
        let mut foreign = item(dec!(1), dec!(5));
        foreign.id = Some(BudgetItemId::new());
        let mut edit = input(vec![kept, foreign]);
        edit.is_vat_enabled = Some(false);
        edit.status = Some(BudgetStatus::Approved);

        let later = now() + Duration::hours(2);
        BudgetService::update(&mut budget, &c, edit, &limits, later).unwrap();

        assert_eq!(budget.id, id);
        assert_eq!(budget.number, number);
        assert_eq!(budget.date, now());
        assert_eq!(budget.updated_at, later);
        assert_eq!(budget.items[0].id, item_id);
        assert_ne!(budget.items[1].id, item_id);
        assert_eq!(budget.status, BudgetStatus::Approved);
        assert_eq!(budget.total(), dec!(205));
        assert_eq!(budget.tax_rate, dec!(23));
    }

    #[test]
    fn test_update_rejects_validity_before_issue() {
        let c = company(CountryCode::PT);
        let limits = PlanLimits::default();
        let mut budget = BudgetService::create(&c, input(vec![]), &limits, now()).unwrap();

        let mut edit = input(vec![]);
        edit.valid_until = NaiveDate::from_ymd_opt(2026, 4, 1);
        assert_eq!(
            BudgetService::update(&mut budget, &c, edit, &limits, now()),
            Err(BudgetError::ValidityBeforeIssue)
        );
    }

    #[test]
    fn test_update_and_remove_item() {
        let c = company(CountryCode::PT);
        let limits = PlanLimits::default();
        let mut budget = BudgetService::create(&c, input(vec![item(dec!(1), dec!(10))]), &limits, now()).unwrap();
        let item_id = budget.items[0].id;

        let updated = BudgetService::update_item(
            &mut budget,
            item_id,
            BudgetItemUpdate {
                quantity: Some(dec!(3)),
                unit: Some("  ".to_string()),
                category: Some(Specialty::Painting),
                ..BudgetItemUpdate::default()
            },
            now(),
        )
        .unwrap();
        assert_eq!(updated.quantity, dec!(3));
        assert_eq!(updated.unit, "un");
        assert_eq!(updated.category, Specialty::Painting);

        let missing = BudgetItemId::new();
        assert_eq!(
            BudgetService::update_item(&mut budget, missing, BudgetItemUpdate::default(), now()),
            Err(BudgetError::ItemNotFound(missing))
        );

        BudgetService::remove_item(&mut budget, item_id, now()).unwrap();
        assert!(budget.items.is_empty());
        assert!(BudgetService::remove_item(&mut budget, item_id, now()).is_err());
    }

    #[test]
    fn test_query_filters_and_orders() {
        let c = company(CountryCode::PT);
        let limits = PlanLimits::default();
        let mut budgets = Vec::new();
        for (i, name) in ["Ana", "Bruno", "Ana Paula"].iter().enumerate() {
            let mut b = input(vec![]);
            b.client.name = (*name).to_string();
            let at = now() + Duration::days(i64::try_from(i).unwrap());
            budgets.push(BudgetService::create(&c, b, &limits, at).unwrap());
        }
        BudgetService::set_status(&mut budgets[1], BudgetStatus::Approved, now());

        let filter = BudgetFilter {
            status: None,
            search: Some("ana".to_string()),
        };
        let page = BudgetService::query(budgets.clone(), &filter, PageRequest::default());
        let names: Vec<_> = page.data.iter().map(|b| b.client.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Paula", "Ana"]);

        let filter = BudgetFilter {
            status: Some(BudgetStatus::Approved),
            search: None,
        };
        let page = BudgetService::query(budgets.clone(), &filter, PageRequest::default());
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].client.name, "Bruno");

        let number = budgets[0].number.to_lowercase();
        let filter = BudgetFilter {
            status: None,
            search: Some(number),
        };
        assert_eq!(BudgetService::query(budgets, &filter, PageRequest::default()).data.len(), 1);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(BudgetStatus::parse("Approved"), Some(BudgetStatus::Approved));
        assert_eq!(BudgetStatus::parse("pending"), Some(BudgetStatus::Draft));
        assert_eq!(BudgetStatus::parse("sent"), None);
    }
}
