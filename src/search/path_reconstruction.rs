use crate::graphs::Vertex;

/// Intermediate vertices strictly between `start` and `end`, in path order.
///
/// Splits recursively at the recorded intermediate vertex. Only meaningful if
/// `end` is reachable from `start`. Returns `None` if a vertex is outside the
/// matrix.
pub fn intermediate_vertices(
    intermediates: &[Vec<Option<Vertex>>],
    start: Vertex,
    end: Vertex,
) -> Option<Vec<Vertex>> {
    let Some(mid) = *intermediates.get(start as usize)?.get(end as usize)? else {
        return Some(Vec::new());
    };

    let mut vertices = intermediate_vertices(intermediates, start, mid)?;
    vertices.push(mid);
    vertices.extend(intermediate_vertices(intermediates, mid, end)?);
    Some(vertices)
}

/// Full route from `start` to `end`, both endpoints included.
///
/// Same result as wrapping [`intermediate_vertices`] with the endpoints, but
/// expands the recorded intermediates with an explicit stack. Returns `None`
/// if a vertex is outside the matrix.
pub fn unpack_path(
    intermediates: &[Vec<Option<Vertex>>],
    start: Vertex,
    end: Vertex,
) -> Option<Vec<Vertex>> {
    let mut path = Vec::new();
    let mut packed_path = vec![start, end];

    while packed_path.len() >= 2 {
        let Some(head) = packed_path.pop() else {
            break;
        };
        let tail = packed_path[packed_path.len() - 1];

        if let Some(mid) = *intermediates.get(tail as usize)?.get(head as usize)? {
            debug_assert!(mid != tail && mid != head, "{} {} {}", tail, mid, head);
            packed_path.push(mid);
            packed_path.push(head);
        } else {
            path.push(head);
        }
    }

    path.push(start);
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::{intermediate_vertices, unpack_path};

    fn chain_intermediates() -> Vec<Vec<Option<u32>>> {
        // 0 -> 1 -> 2 -> 3, recorded as [0][3] via 2 and [0][2] via 1
        let mut intermediates = vec![vec![None; 4]; 4];
        intermediates[0][3] = Some(2);
        intermediates[0][2] = Some(1);
        intermediates[1][3] = Some(2);
        intermediates
    }

    #[test]
    fn recursive_split_keeps_path_order() {
        let intermediates = chain_intermediates();
        assert_eq!(intermediate_vertices(&intermediates, 0, 3), Some(vec![1, 2]));
        assert_eq!(intermediate_vertices(&intermediates, 1, 3), Some(vec![2]));
        assert_eq!(intermediate_vertices(&intermediates, 2, 3), Some(vec![]));
    }

    #[test]
    fn stack_unpacking_includes_endpoints() {
        let intermediates = chain_intermediates();
        assert_eq!(unpack_path(&intermediates, 0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(unpack_path(&intermediates, 2, 3), Some(vec![2, 3]));
    }

    #[test]
    fn vertex_zero_is_a_valid_intermediate() {
        let mut intermediates = vec![vec![None; 3]; 3];
        intermediates[1][2] = Some(0);
        assert_eq!(intermediate_vertices(&intermediates, 1, 2), Some(vec![0]));
        assert_eq!(unpack_path(&intermediates, 1, 2), Some(vec![1, 0, 2]));
    }

    #[test]
    fn trivial_route_repeats_the_vertex() {
        let intermediates = vec![vec![None; 2]; 2];
        assert_eq!(intermediate_vertices(&intermediates, 1, 1), Some(vec![]));
        assert_eq!(unpack_path(&intermediates, 1, 1), Some(vec![1, 1]));
    }

    #[test]
    fn unknown_vertices_have_no_route() {
        let intermediates = chain_intermediates();
        assert_eq!(intermediate_vertices(&intermediates, 4, 0), None);
        assert_eq!(intermediate_vertices(&intermediates, 0, 7), None);
        assert_eq!(unpack_path(&intermediates, 4, 0), None);
        assert_eq!(unpack_path(&intermediates, 0, 7), None);
    }
}
