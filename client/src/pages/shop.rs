//! Merchandise shop with search, category, sort, and stock filters.

use leptos::prelude::*;
use wire::ShopProduct;

use crate::components::remote_view::remote_view;
use crate::net::api;
use crate::state::catalog::{ShopFilter, ShopSort, shop_categories};
use crate::util::format::format_price;
use crate::util::remote::use_remote;

#[component]
pub fn ShopPage() -> impl IntoView {
    let products = use_remote(api::get_shop);
    let filter = RwSignal::new(ShopFilter::default());

    let categories =
        move || products.state.with(|s| s.data().map(|list| shop_categories(list)).unwrap_or_default());

    view! {
        <main class="shop-page">
            <h1>"Shop"</h1>
            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    prop:value=move || filter.with(|f| f.category.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.category = (!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"All Categories"</option>
                    {move || {
                        categories()
                            .into_iter()
                            .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    prop:value=move || filter.with(|f| f.sort.value())
                    on:change=move |ev| filter.update(|f| f.sort = ShopSort::from_value(&event_target_value(&ev)))
                >
                    {ShopSort::ALL
                        .iter()
                        .map(|s| view! { <option value=s.value()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <label class="filter-bar__check">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.in_stock_only)
                        on:change=move |ev| filter.update(|f| f.in_stock_only = event_target_checked(&ev))
                    />
                    "In stock only"
                </label>
                <button class="btn" on:click=move |_| filter.update(ShopFilter::clear)>
                    "Clear filters"
                </button>
            </div>
            {remote_view(products.state, "Loading products...", move |list: &Vec<ShopProduct>| {
                let list = list.clone();
                move || {
                    let shown = filter.with(|f| f.apply(&list));
                    if shown.is_empty() {
                        return view! { <p class="shop-page__empty">"No products match your filters."</p> }
                            .into_any();
                    }
                    view! { <div class="shop-page__grid">{shown.iter().map(product_card).collect_view()}</div> }
                        .into_any()
                }
            })}
        </main>
    }
}

fn product_card(product: &ShopProduct) -> impl IntoView + use<> {
    let in_stock = product.in_stock();
    view! {
        <article class="product-card">
            {product.image.clone().map(|src| view! { <img src=src alt=product.name.clone()/> })}
            <span class="product-card__category">{product.category.clone()}</span>
            <h3>{product.name.clone()}</h3>
            <p class="product-card__price">{format_price(product.price)}</p>
            {if in_stock {
                view! { <button class="btn btn--primary">"Add to Cart"</button> }.into_any()
            } else {
                view! { <span class="product-card__sold-out">"Out of Stock"</span> }.into_any()
            }}
        </article>
    }
}
