//! Customer testimonials shown under the gallery.

use sweet_treats_core::TestimonialId;

use super::{image_or_placeholder, next_index, previous_index};

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: &'static str,
    pub comment: &'static str,
    /// 1 to 5 stars.
    pub rating: u8,
    pub image: &'static str,
    pub date: &'static str,
}

impl Testimonial {
    #[must_use]
    pub fn image_src(&self) -> &'static str {
        image_or_placeholder(self.image)
    }

    /// One entry per star, `true` where the star is filled.
    #[must_use]
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let mut stars = [false; MAX_RATING as usize];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = i < usize::from(self.rating.min(MAX_RATING));
        }
        stars
    }
}

/// Carousel position over a testimonial list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// A carousel of `len` slides showing slide `index` (wrapped into range).
    #[must_use]
    pub const fn new(index: usize, len: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn next(self) -> usize {
        next_index(self.index, self.len)
    }

    #[must_use]
    pub const fn previous(self) -> usize {
        previous_index(self.index, self.len)
    }
}

pub(crate) const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: TestimonialId::new(1),
        name: "Sarah Johnson",
        comment: "The honey glazed donuts are absolutely divine! I've never tasted anything like them before. The Hive Pastries has become my weekend treat spot.",
        rating: 5,
        image: "/Gallery/person1.png",
        date: "March 15, 2023",
    },
    Testimonial {
        id: TestimonialId::new(2),
        name: "Michael Kimani",
        comment: "I ordered a Queen Bee Cake for my daughter's birthday and it was a huge hit! Not only was it beautiful, but it tasted amazing too. Will definitely order again.",
        rating: 5,
        image: "/Gallery/person1.png",
        date: "February 3, 2023",
    },
    Testimonial {
        id: TestimonialId::new(3),
        name: "Aisha Omondi",
        comment: "The atmosphere at The Hive is so welcoming, and their pastries are consistently excellent. The bee pollen cookies are my favorite - delicious and nutritious!",
        rating: 4,
        image: "/Gallery/person1.png",
        date: "April 22, 2023",
    },
    Testimonial {
        id: TestimonialId::new(4),
        name: "David Mwangi",
        comment: "As someone with a sweet tooth, I've tried many bakeries in town, but The Hive Pastries stands out for their quality and creativity. Their honeycomb bread is exceptional.",
        rating: 5,
        image: "/Gallery/person1.png",
        date: "January 17, 2023",
    },
];
