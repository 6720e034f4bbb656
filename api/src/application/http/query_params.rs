use std::collections::HashMap;
use std::str::FromStr;

/// Filter operator for query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,    // equals (default)
    Gte,   // greater than or equal
    Lte,   // less than or equal
    Ilike, // substring, case-insensitive
}

impl FromStr for FilterOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "gte" => Ok(FilterOperator::Gte),
            "lte" => Ok(FilterOperator::Lte),
            "ilike" => Ok(FilterOperator::Ilike),
            other => Err(format!("unsupported filter operator '{}'", other)),
        }
    }
}

/// Filter condition for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        let sorts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix('-') {
                Some(stripped) => SortSpec {
                    field: stripped.to_string(),
                    direction: SortDirection::Desc,
                },
                None => SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                },
            })
            .collect();

        Self { sorts }
    }

    /// Back to the "field,-field" form the repository understands.
    pub fn to_sort_string(&self) -> String {
        self.sorts
            .iter()
            .map(|s| match s.direction {
                SortDirection::Desc => format!("-{}", s.field),
                SortDirection::Asc => s.field.clone(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Raw skip/limit; range checks belong to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

/// Combined query parameters (filter, sort, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles formats like:
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - sort=field or sort=-field
    /// - skip=0, limit=1000
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Result<Self, String> {
        let mut params = QueryParams::default();

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                let end_bracket = filter_key
                    .find(']')
                    .ok_or_else(|| format!("malformed filter parameter '{}'", key))?;
                let field = filter_key[..end_bracket].to_string();
                let remaining = &filter_key[end_bracket + 1..];

                let operator = if remaining.is_empty() {
                    FilterOperator::Eq
                } else if remaining.starts_with('[') && remaining.ends_with(']') {
                    remaining[1..remaining.len() - 1].parse::<FilterOperator>()?
                } else {
                    return Err(format!("malformed filter parameter '{}'", key));
                };

                params.filter.conditions.push(FilterCondition {
                    field,
                    operator,
                    value: value.clone(),
                });
            } else if key == "sort" {
                params.sort = SortParams::from_string(value);
            } else if key == "skip" {
                params.pagination.skip = Some(parse_count("skip", value)?);
            } else if key == "limit" {
                params.pagination.limit = Some(parse_count("limit", value)?);
            }
        }

        // HashMap iteration order is random
        params
            .filter
            .conditions
            .sort_by(|a, b| a.field.cmp(&b.field));

        Ok(params)
    }
}

fn parse_count(name: &str, value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("{} must be a non-negative integer", name))
}
