use crate::{Real, Vector3};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AABB<T> {
    pub lower_bound: Vector3<T>,
    pub upper_bound: Vector3<T>,
}

impl<T: Real> AABB<T> {
    pub fn new(lower_bound: Vector3<T>, upper_bound: Vector3<T>) -> AABB<T> {
        AABB {
            lower_bound,
            upper_bound,
        }
    }

    pub fn is_valid(&self) -> bool {
        let d = self.upper_bound - self.lower_bound;
        self.lower_bound.is_valid()
            && self.upper_bound.is_valid()
            && d.x >= T::zero()
            && d.y >= T::zero()
            && d.z >= T::zero()
    }

    pub fn center(&self) -> Vector3<T> {
        (self.lower_bound + self.upper_bound) * T::half()
    }

    pub fn extents(&self) -> Vector3<T> {
        (self.upper_bound - self.lower_bound) * T::half()
    }

    pub fn combine(self, aabb: &AABB<T>) -> AABB<T> {
        AABB {
            lower_bound: self.lower_bound.min(aabb.lower_bound),
            upper_bound: self.upper_bound.max(aabb.upper_bound),
        }
    }

    pub fn contains(&self, aabb: &AABB<T>) -> bool {
        let mut result = true;
        result = result && self.lower_bound.x <= aabb.lower_bound.x;
        result = result && self.lower_bound.y <= aabb.lower_bound.y;
        result = result && self.lower_bound.z <= aabb.lower_bound.z;
        result = result && aabb.upper_bound.x <= self.upper_bound.x;
        result = result && aabb.upper_bound.y <= self.upper_bound.y;
        result = result && aabb.upper_bound.z <= self.upper_bound.z;
        result
    }

    pub fn contains_point(&self, point: &Vector3<T>) -> bool {
        point.x >= self.lower_bound.x
            && point.x <= self.upper_bound.x
            && point.y >= self.lower_bound.y
            && point.y <= self.upper_bound.y
            && point.z >= self.lower_bound.z
            && point.z <= self.upper_bound.z
    }

    pub fn is_overlap(&self, aabb: &AABB<T>) -> bool {
        let d1 = aabb.lower_bound - self.upper_bound;
        let d2 = self.lower_bound - aabb.upper_bound;
        if d1.x > T::zero() || d1.y > T::zero() || d1.z > T::zero() {
            return false;
        }
        if d2.x > T::zero() || d2.y > T::zero() || d2.z > T::zero() {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_covers_both_boxes() {
        let a = AABB::new(Vector3::new(-1.0f32, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let b = AABB::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 3.0, 1.0));
        let c = a.combine(&b);
        assert!(c.contains(&a));
        assert!(c.contains(&b));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = AABB::new(Vector3::new(0.0f32, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        let b = AABB::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(3.0, 1.0, 1.0));
        assert!(!a.is_overlap(&b));
        assert!(a.is_overlap(&a));
    }
}
