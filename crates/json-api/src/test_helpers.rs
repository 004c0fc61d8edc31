//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, catcher::Catcher, prelude::*};
use uuid::Uuid;

use tiffin::{
    commissions::{CommissionConfig, CommissionType},
    variations::{Variation, VariationStatus},
};
use tiffin_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        commissions::{
            MockCommissionsService,
            records::{CommissionRecord, CommissionUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid, ProductVariation, VariationUuid},
        },
        restaurants::{
            MockRestaurantsService,
            records::{RestaurantRecord, RestaurantUuid},
        },
        tenants::records::TenantUuid,
    },
};

use crate::{extensions::*, response::envelope_catcher, state::State};

pub(crate) const TEST_TENANT_UUID: TenantUuid = TenantUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_tenant(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_tenant_uuid(TEST_TENANT_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_restaurants_mock() -> MockRestaurantsService {
    let mut restaurants = MockRestaurantsService::new();

    restaurants.expect_list_restaurants().never();
    restaurants.expect_get_restaurant().never();
    restaurants.expect_create_restaurant().never();

    restaurants
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_update_variation_stock().never();
    products.expect_bulk_update_stock().never();

    products
}

fn strict_commissions_mock() -> MockCommissionsService {
    let mut commissions = MockCommissionsService::new();

    commissions.expect_list_commissions().never();
    commissions.expect_get_commission().never();
    commissions.expect_create_commission().never();
    commissions.expect_update_commission().never();
    commissions.expect_toggle_commission().never();
    commissions.expect_delete_commission().never();

    commissions
}

fn strict_context() -> AppContext {
    AppContext {
        restaurants: Arc::new(strict_restaurants_mock()),
        products: Arc::new(strict_products_mock()),
        commissions: Arc::new(strict_commissions_mock()),
        auth: Arc::new(strict_auth_mock()),
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    State::from_app_context(AppContext {
        auth: Arc::new(auth),
        ..strict_context()
    })
}

/// Service with the tenant already authenticated and errors enveloped.
fn tenant_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .hoop(inject_tenant)
            .push(route),
    )
    .catcher(Catcher::default().hoop(envelope_catcher))
}

pub(crate) fn restaurants_service(restaurants: MockRestaurantsService, route: Router) -> Service {
    tenant_service(
        AppContext {
            restaurants: Arc::new(restaurants),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    tenant_service(
        AppContext {
            products: Arc::new(products),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn commissions_service(commissions: MockCommissionsService, route: Router) -> Service {
    tenant_service(
        AppContext {
            commissions: Arc::new(commissions),
            ..strict_context()
        },
        route,
    )
}

pub(crate) fn make_restaurant(uuid: RestaurantUuid, name: &str) -> RestaurantRecord {
    RestaurantRecord {
        uuid,
        name: name.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

/// A single-variation product: "Regular" at 100, 3 in stock.
pub(crate) fn make_product(uuid: ProductUuid, variation: VariationUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        restaurant: RestaurantUuid::from_uuid(Uuid::nil()),
        name: "Paneer Tikka".to_string(),
        variations: vec![ProductVariation {
            uuid: variation,
            variation: Variation {
                name: "Size".to_string(),
                value: "Regular".to_string(),
                price: Decimal::ONE_HUNDRED,
                disc_price: Decimal::ZERO,
                stock: 3,
                status: VariationStatus::Available,
            },
        }],
        price: Decimal::ONE_HUNDRED,
        disc_price: Decimal::ZERO,
        stock: 3,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_commission(
    uuid: CommissionUuid,
    restaurant: RestaurantUuid,
    kind: CommissionType,
    value: Decimal,
    status: bool,
) -> CommissionRecord {
    CommissionRecord {
        uuid,
        restaurant,
        config: CommissionConfig::from_parts(kind, value, None, status),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}
