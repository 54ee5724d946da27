//! SELECT assembly: walk a [`Criteria`], apply the builder chain to its
//! WHERE tree and produce the final SQL string plus ordered bindings.

use tracing::debug;

use crate::criteria::{Criteria, Criterion};
use crate::error::{QuarryError, QuarryResult};
use crate::sql::adapter::{self, Adapter, Postgres};
use crate::sql::builders::BuilderChain;
use crate::sql::query::Query;

/// The criteria-to-SQL compiler. A pure, synchronous pass: no state is
/// kept between invocations.
pub struct SqlBuilder;

impl SqlBuilder {
    /// Compile `criteria` against the given adapter and builder chain.
    pub fn build(
        criteria: &Criteria,
        adapter: &dyn Adapter,
        chain: &BuilderChain,
    ) -> QuarryResult<Query> {
        debug!(
            columns = criteria.columns.len(),
            joins = criteria.joins.len(),
            "compiling criteria"
        );

        // Render the boolean trees first; they also feed table discovery.
        let where_part = criteria
            .root
            .as_ref()
            .map(|root| chain.build_criterion(root, criteria.ignore_case, adapter))
            .transpose()?;
        let having_part = criteria
            .having
            .as_ref()
            .map(|having| chain.build_criterion(having, criteria.ignore_case, adapter))
            .transpose()?;

        let mut sql = if criteria.distinct {
            String::from("SELECT DISTINCT ")
        } else {
            String::from("SELECT ")
        };
        if criteria.columns.is_empty() {
            sql.push('*');
        } else {
            let cols: Vec<String> = criteria
                .columns
                .iter()
                .map(|c| c.qualified_name())
                .collect();
            sql.push_str(&cols.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&from_clause(criteria)?);

        for join in &criteria.joins {
            let table = join.right.table.as_deref().ok_or_else(|| {
                QuarryError::config(format!(
                    "join target column {} has no table qualifier",
                    join.right.qualified_name()
                ))
            })?;
            sql.push_str(&format!(
                " {} JOIN {} ON {}={}",
                join.kind.sql_keyword(),
                render_table(table, &criteria.aliases),
                join.left.qualified_name(),
                join.right.qualified_name()
            ));
        }

        let mut bindings = Vec::new();
        if let Some(part) = where_part {
            sql.push_str(" WHERE ");
            sql.push_str(&part.sql_string());
            bindings.extend(part.bindings());
        }

        if !criteria.group_by.is_empty() {
            let cols: Vec<String> = criteria
                .group_by
                .iter()
                .map(|c| c.qualified_name())
                .collect();
            sql.push_str(" GROUP BY ");
            sql.push_str(&cols.join(", "));
        }

        if let Some(part) = having_part {
            sql.push_str(" HAVING ");
            sql.push_str(&part.sql_string());
            bindings.extend(part.bindings());
        }

        if !criteria.order_by.is_empty() {
            let entries: Vec<String> = criteria
                .order_by
                .iter()
                .map(|o| format!("{} {}", o.column.qualified_name(), o.order.sql_keyword()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&entries.join(", "));
        }

        sql.push_str(&adapter.limit_offset(criteria.limit, criteria.offset));

        debug!(sql = %sql, bindings = bindings.len(), "criteria compiled");
        Ok(Query::new(sql, bindings))
    }
}

/// FROM items in first-seen order: every table qualifier from the select
/// list, the WHERE tree, grouping and ordering, minus tables that enter
/// through a JOIN clause. Aliased names render as `real_table alias`.
fn from_clause(criteria: &Criteria) -> QuarryResult<String> {
    fn push(table: &Option<String>, tables: &mut Vec<String>) {
        if let Some(t) = table {
            if !tables.contains(t) {
                tables.push(t.clone());
            }
        }
    }

    let mut tables: Vec<String> = Vec::new();
    for col in &criteria.columns {
        push(&col.table, &mut tables);
    }
    if let Some(root) = &criteria.root {
        for table in criterion_tables(root) {
            if !tables.contains(&table) {
                tables.push(table);
            }
        }
    }
    for col in &criteria.group_by {
        push(&col.table, &mut tables);
    }
    for entry in &criteria.order_by {
        push(&entry.column.table, &mut tables);
    }

    let joined: Vec<&str> = criteria
        .joins
        .iter()
        .filter_map(|j| j.right.table.as_deref())
        .collect();
    tables.retain(|t| !joined.contains(&t.as_str()));

    if tables.is_empty() {
        return Err(QuarryError::config(
            "no table to select from; qualify at least one column",
        ));
    }

    let items: Vec<String> = tables
        .iter()
        .map(|t| render_table(t, &criteria.aliases))
        .collect();
    Ok(items.join(", "))
}

/// `alias` qualifiers resolve through the alias map to `real_table alias`.
fn render_table(table: &str, aliases: &[(String, String)]) -> String {
    match aliases.iter().find(|(alias, _)| alias == table) {
        Some((alias, real)) => format!("{} {}", real, alias),
        None => table.to_string(),
    }
}

/// Table qualifiers referenced anywhere in a criterion tree, left to right.
fn criterion_tables(criterion: &Criterion) -> Vec<String> {
    let mut out = Vec::new();
    collect_tables(criterion, &mut out);
    out
}

fn collect_tables(criterion: &Criterion, out: &mut Vec<String>) {
    use crate::criteria::Operand;
    match criterion {
        Criterion::Leaf(leaf) => {
            for operand in [&leaf.left, &leaf.right] {
                if let Operand::Column(col) = operand {
                    if let Some(table) = &col.table {
                        if !out.contains(table) {
                            out.push(table.clone());
                        }
                    }
                }
            }
        }
        Criterion::Composite(composite) => {
            for part in &composite.parts {
                collect_tables(part, out);
            }
        }
        Criterion::Verbatim(_) => {}
    }
}

impl Criteria {
    /// Compile with the adapter resolved from [`db_name`] (PostgreSQL when
    /// unset) and the default builder chain.
    ///
    /// [`db_name`]: Criteria::db_name
    pub fn compile(&self) -> QuarryResult<Query> {
        let adapter: Box<dyn Adapter> = match &self.db_name {
            None => Box::new(Postgres),
            Some(name) => adapter::for_name(name).ok_or_else(|| {
                QuarryError::config(format!("unknown database name: {}", name))
            })?,
        };
        SqlBuilder::build(self, adapter.as_ref(), &BuilderChain::default())
    }

    /// Compile with an explicit adapter and builder chain.
    pub fn compile_with(
        &self,
        adapter: &dyn Adapter,
        chain: &BuilderChain,
    ) -> QuarryResult<Query> {
        SqlBuilder::build(self, adapter, chain)
    }
}
