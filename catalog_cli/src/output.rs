use anyhow::Result;
use catalog_lib::{Affordance, DetailState, DetailView, ListItem, ListState, Pagination};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Image")]
    #[serde(rename = "Image")]
    image: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Serialize)]
struct ProductDetailRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Image")]
    image: String,
}

#[derive(Serialize)]
struct DetailJson<'a> {
    #[serde(flatten)]
    state: &'a DetailState,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

// -- Row builders --

fn build_product_rows(items: &[ListItem]) -> Vec<ProductRow> {
    items
        .iter()
        .map(|item| ProductRow {
            id: item.product.id.clone(),
            name: item.product.name.clone(),
            category: item.product.category.clone(),
            price: format_price(item.product.price),
            image: item.image.src().to_string(),
        })
        .collect()
}

fn build_detail_row(view: &DetailView) -> Option<ProductDetailRow> {
    let DetailState::Ready { product } = view.state() else {
        return None;
    };
    Some(ProductDetailRow {
        id: product.id.clone(),
        name: product.name.clone(),
        category: product.category.clone(),
        description: product.description.clone().unwrap_or_default(),
        price: format_price(product.price),
        image: view
            .image()
            .map(|slot| slot.src().to_string())
            .unwrap_or_default(),
    })
}

fn build_field_rows(row: ProductDetailRow) -> Vec<FieldRow> {
    let mut fields = vec![
        FieldRow {
            field: "ID",
            value: row.id,
        },
        FieldRow {
            field: "Name",
            value: row.name,
        },
        FieldRow {
            field: "Category",
            value: row.category,
        },
        FieldRow {
            field: "Price",
            value: row.price,
        },
    ];
    if !row.description.is_empty() {
        fields.push(FieldRow {
            field: "Description",
            value: row.description,
        });
    }
    fields.push(FieldRow {
        field: "Image",
        value: row.image,
    });
    fields
}

/// The page strip under a listing, e.g. `« 1 [2] 3 »`. The current page is
/// bracketed; edges that lead nowhere are dimmed to `·`.
pub fn pagination_strip(pagination: &Pagination) -> String {
    pagination
        .controls()
        .iter()
        .map(|control| match control.affordance {
            Affordance::Page(n) if control.disabled => format!("[{}]", n),
            Affordance::First | Affordance::Last if control.disabled => "·".to_string(),
            affordance => affordance.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// -- List output --

pub fn print_list(state: &ListState, format: &OutputFormat) -> Result<()> {
    let ListState::Populated { items, pagination } = state else {
        let message = state.message().unwrap_or_default();
        match format {
            OutputFormat::Json => print_json(state),
            OutputFormat::Csv => eprintln!("{}", message),
            OutputFormat::Table | OutputFormat::Markdown => println!("{}", message),
        }
        return Ok(());
    };

    match format {
        OutputFormat::Table => {
            println!("{}", Table::new(build_product_rows(items)));
            println!("{}", pagination_strip(pagination));
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(build_product_rows(items));
            table.with(Style::markdown());
            println!("{}", table);
            println!();
            println!("{}", pagination_strip(pagination));
        }
        OutputFormat::Csv => print_csv(&build_product_rows(items))?,
        OutputFormat::Json => print_json(state),
    }
    Ok(())
}

// -- Detail output --

pub fn print_detail(view: &DetailView, format: &OutputFormat) -> Result<()> {
    if let OutputFormat::Json = format {
        print_json(&DetailJson {
            state: view.state(),
            image: view.image().map(|slot| slot.src()),
        });
        return Ok(());
    }

    let Some(row) = build_detail_row(view) else {
        let message = view.state().message().unwrap_or_default();
        match format {
            OutputFormat::Csv => eprintln!("{}", message),
            _ => println!("{}", message),
        }
        return Ok(());
    };

    match format {
        OutputFormat::Table => println!("{}", Table::new(build_field_rows(row))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_field_rows(row));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(&[row])?,
        OutputFormat::Json => {}
    }
    Ok(())
}

// -- CSV output --

fn print_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
