use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(page: i64, limit: i64, total: i64, data: Vec<T>) -> Paginated<T> {
        Paginated {
            page,
            limit,
            total,
            total_pages: total_pages(total, limit),
            data,
        }
    }
}

fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        return 0;
    }

    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::{total_pages, Paginated};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(41, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(1, 20), 1);
    }

    #[test]
    fn zero_total_means_zero_pages() {
        assert_eq!(total_pages(0, 20), 0);
    }

    #[test]
    fn wraps_data_untouched() {
        let result = Paginated::new(2, 10, 25, vec![1, 2, 3]);

        assert_eq!(result.total_pages, 3);
        assert_eq!(result.data, vec![1, 2, 3]);
    }
}
